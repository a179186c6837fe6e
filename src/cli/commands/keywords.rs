use anyhow::Context;
use clap::Args;
use serde_json::json;
use std::io::Read;

use crate::cli::{utils::output_list, OutputFormat};
use crate::config;
use crate::keywords::KeywordExtractor;

#[derive(Args)]
pub struct KeywordsArgs {
    #[arg(help = "Text to analyze; read from stdin when omitted")]
    pub text: Option<String>,

    #[arg(long = "banned", help = "Word to exclude (repeatable); defaults to KEYWORDS_BANNED_WORDS")]
    pub banned: Vec<String>,
}

pub fn handle(args: KeywordsArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read text from stdin")?;
            buf
        }
    };

    let extractor = if args.banned.is_empty() {
        KeywordExtractor::new(&config::config().keywords.banned_words)
    } else {
        KeywordExtractor::new(&args.banned)
    };

    let keywords = extractor.extract(&text);
    output_list(&output_format, &keywords, json!({ "keywords": keywords }))
}
