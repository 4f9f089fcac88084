//! Classify command - print the kind of each URL

use crate::url::classify;
use anyhow::Result;

pub fn run(urls: &[String]) -> Result<()> {
    for url in urls {
        println!("{}\t{}", classify(url), url);
    }
    Ok(())
}
