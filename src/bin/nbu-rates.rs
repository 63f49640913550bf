//! Interactive front end: asks for a currency, an operation and any dates,
//! then prints one result. No retry loop; bad input prints a message and exits.

use std::process::ExitCode;

use chrono::NaiveDate;
use nbu_rates::date::parse_date;
use nbu_rates::{Currency, NbuClient, NbuError, Operation};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};

const PROMPT: &str = ">>> ";

#[tokio::main]
async fn main() -> ExitCode {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), NbuError> {
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("Enter currency. Alphabetical (like: EUR), numeral (like: 978) or full ukrainian name:");
    let token = ask(&mut input, PROMPT).await?;

    println!(
        "Select operation: \n1.Get current info \n2.Get info by date \n3.Get sequence of changing by dates"
    );
    let op = match ask(&mut input, PROMPT).await?.trim() {
        "1" => Operation::Current,
        "2" => match read_date(&mut input, "Enter date dd.mm.yyyy: ").await? {
            Some(date) => Operation::OnDate(date),
            None => return wrong_date(),
        },
        "3" => {
            let Some(start) = read_date(&mut input, "Enter start date dd.mm.yyyy: ").await? else {
                return wrong_date();
            };
            let Some(end) = read_date(&mut input, "Enter end date dd.mm.yyyy: ").await? else {
                return wrong_date();
            };
            Operation::Trend { start, end }
        }
        _ => {
            println!("Wrong operation");
            return Ok(());
        }
    };

    let client = NbuClient::default();
    match Currency::new(&client, token).run(op).await {
        Ok(report) => println!("{report}"),
        Err(NbuError::CurrencyNotFound { .. }) => println!("No currency found"),
        Err(NbuError::ReversedRange { .. }) => println!("Wrong time direction"),
        Err(e) => return Err(e),
    }
    Ok(())
}

fn wrong_date() -> Result<(), NbuError> {
    println!("Wrong date entered");
    Ok(())
}

/// `Ok(None)` when the answer is not a date; `Err` only when reading fails.
async fn read_date<R>(input: &mut Lines<R>, label: &str) -> Result<Option<NaiveDate>, NbuError>
where
    R: AsyncBufRead + Unpin,
{
    println!("{label}");
    Ok(parse_date(&ask(input, PROMPT).await?))
}

/// Prints `prompt` without a newline and reads one line; EOF reads as empty.
async fn ask<R>(input: &mut Lines<R>, prompt: &str) -> Result<String, NbuError>
where
    R: AsyncBufRead + Unpin,
{
    let mut out = tokio::io::stdout();
    // A failed flush only loses the prompt text.
    let _ = out.write_all(prompt.as_bytes()).await;
    let _ = out.flush().await;
    Ok(input.next_line().await?.unwrap_or_default())
}
