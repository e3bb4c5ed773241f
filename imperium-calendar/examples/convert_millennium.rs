use imperium_calendar::{ImperialDate, ToGregorian};

fn main() -> anyhow::Result<()> {
    let millennium = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<i64>()?,
        None => 35,
    };

    for year in 1..=1_000 {
        let date = ImperialDate::from_numbers(millennium, Some(year), None, None);
        let gregorian = date.to_gregorian()?;
        println!("{}: {}", date, gregorian);
    }

    Ok(())
}
