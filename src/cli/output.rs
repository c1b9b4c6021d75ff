use std::fmt::Display;

use clap::builder::styling::AnsiColor;
use serde::Serialize;

use crate::error::Result;

#[derive(Serialize)]
struct Report<'a, T> {
    prefix: &'a str,
    result: T,
}

pub fn print_value<T: Serialize + Display>(
    json: bool,
    prefix: &str,
    value: Option<T>,
) -> Result<()> {
    if json {
        print_json(prefix, value)?;
    } else if let Some(value) = value {
        println!("{value}");
    }

    Ok(())
}

pub fn print_list(json: bool, prefix: &str, values: &[&str]) -> Result<()> {
    if json {
        print_json(prefix, values)?;
    } else {
        for value in values {
            println!("{value}");
        }
    }

    Ok(())
}

pub fn print_stat<T: Display>(name: &str, value: T) {
    let style = AnsiColor::Cyan.on_default();
    eprintln!("{style}{name}:{style:#} {value}");
}

fn print_json<T: Serialize>(prefix: &str, result: T) -> Result<()> {
    let report = Report { prefix, result };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
