//! `pathvalidate error` - describe reason codes as a markdown table.

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::io::{self, Write};

use pathvalidate::Reason;

use super::Status;
use crate::Cli;
use crate::ui::write_markdown_table;

const TABLE_TITLE: &str = "Error Reason";
const HEADERS: [&str; 3] = ["Code", "Name", "Description"];

pub fn execute(codes: &[String], list: bool) -> Result<Status> {
    let mut stdout = io::stdout().lock();

    if codes.is_empty() && !list {
        let mut command = Cli::command();
        let help = command
            .find_subcommand_mut("error")
            .context("error subcommand is not registered")?
            .render_help();
        write!(stdout, "{help}")?;
        return Ok(Status::Success);
    }

    let (rows, status) = collect_rows(&mut stdout, codes, list)?;
    write_markdown_table(&mut stdout, TABLE_TITLE, &HEADERS, &rows)?;
    Ok(status)
}

/// Table rows for the requested codes; unknown codes are reported inline.
fn collect_rows<W: Write>(out: &mut W, codes: &[String], list: bool) -> Result<(Vec<Vec<String>>, Status)> {
    if list {
        return Ok((Reason::list_all().map(row).collect(), Status::Success));
    }

    let mut rows = Vec::with_capacity(codes.len());
    let mut status = Status::Success;
    for code in codes {
        match Reason::lookup(code) {
            Ok(reason) => rows.push(row(reason)),
            Err(e) => {
                writeln!(out, "{e}")?;
                status = Status::RecordFailure;
            },
        }
    }
    Ok((rows, status))
}

fn row(reason: Reason) -> Vec<String> {
    vec![
        reason.code().to_string(),
        reason.name().to_string(),
        reason.description().to_string(),
    ]
}
