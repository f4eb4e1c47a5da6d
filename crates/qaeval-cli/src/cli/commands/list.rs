use super::super::args::ListArgs;
use super::builder::load_dataset;
use crate::exit_codes;

pub(crate) fn cmd_list(args: ListArgs) -> anyhow::Result<i32> {
    let examples = match load_dataset(&args.dataset) {
        Ok(examples) => examples,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };
    for (i, ex) in examples.iter().enumerate() {
        println!("{}. {}", i + 1, ex.question);
    }
    Ok(exit_codes::SUCCESS)
}
