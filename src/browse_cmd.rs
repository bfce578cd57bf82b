//! Browse command: interactive timeline over stdin.

use std::io::{BufRead, Write as _};
use std::time::Duration;

use anyhow::{Context, Result};
use jiff::Timestamp;
use jiff::civil::Date;
use tracing::info;

use usdm_calendar::DateSequence;
use usdm_overlay::FetchingLoader;
use usdm_schedule::AvailabilitySchedule;
use usdm_timeline::{OverlayLoader, Timeline};

use crate::cli::BrowseArgs;
use crate::sink::TerminalSink;

/// Loader for `--offline` mode: the controls run, nothing is fetched.
struct OfflineLoader;

impl OverlayLoader for OfflineLoader {
    fn load(&mut self, date: Date) {
        info!(%date, "offline mode; skipping fetch");
    }
}

pub fn run(args: BrowseArgs) -> Result<()> {
    let schedule =
        AvailabilitySchedule::us_drought_monitor().context("failed to build schedule")?;
    let latest = schedule.latest_available_or_fallback(Some(
        args.now.unwrap_or_else(Timestamp::now),
    ));
    let sequence = DateSequence::generate(schedule.epoch(), latest, schedule.release_weekday())
        .context("failed to generate release sequence")?;

    if args.offline {
        let mut timeline = Timeline::new(sequence, OfflineLoader);
        run_loop(&mut timeline)
    } else {
        let mut timeline = Timeline::new(sequence, FetchingLoader::new(TerminalSink));
        run_loop(&mut timeline)
    }
}

fn run_loop<L: OverlayLoader>(timeline: &mut Timeline<L>) -> Result<()> {
    println!(
        "releases {} .. {} ({} weeks); type 'help' for commands",
        timeline.range().first_year(),
        timeline.range().last_year(),
        timeline.sequence().len()
    );
    print_status(timeline);

    let stdin = std::io::stdin();
    loop {
        print!("usdm> ");
        std::io::stdout().flush().context("failed to flush prompt")?;

        let mut line = String::new();
        if stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read command")?
            == 0
        {
            break;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = tokens.split_first() else {
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            "show" => print_status(timeline),
            "newest" => {
                timeline.newest();
                print_status(timeline);
            }
            "oldest" => {
                timeline.oldest();
                print_status(timeline);
            }
            "next" => {
                timeline.next();
                print_status(timeline);
            }
            "prev" => {
                timeline.prev();
                print_status(timeline);
            }
            "slider" => {
                drag_slider(timeline, rest);
                print_status(timeline);
            }
            "date" => match rest.first().map(|s| s.parse::<Date>()) {
                Some(Ok(date)) => {
                    if !timeline.select_date(date) {
                        println!("{date} is not a release date");
                    }
                    print_status(timeline);
                }
                _ => println!("usage: date YYYY-MM-DD"),
            },
            "year" => match rest.first().map(|s| s.parse::<i16>()) {
                Some(Ok(year)) => {
                    if !timeline.pick_year(year) {
                        println!("no releases in {year}");
                    }
                    print_status(timeline);
                }
                _ => println!("usage: year YYYY"),
            },
            "month" => match rest.first().map(|s| s.parse::<i8>()) {
                Some(Ok(month)) => {
                    if !timeline.pick_month(month) {
                        println!("no releases in that month");
                    }
                    print_status(timeline);
                }
                _ => println!("usage: month M"),
            },
            "day" => match rest.first().map(|s| s.parse::<i8>()) {
                Some(Ok(day)) => {
                    if !timeline.pick_day(day) {
                        println!("no release on that day");
                    }
                    print_status(timeline);
                }
                _ => println!("usage: day D"),
            },
            other => println!("unknown command '{other}'; type 'help'"),
        }
    }
    Ok(())
}

/// Feeds a drag stream of slider values and waits out the quiet period so
/// only the trailing value triggers a load.
fn drag_slider<L: OverlayLoader>(timeline: &mut Timeline<L>, values: &[&str]) {
    let mut fed = false;
    for token in values {
        match token.parse::<usize>() {
            Ok(value) => {
                timeline.slider_input(value, Timestamp::now());
                fed = true;
            }
            Err(_) => {
                println!("usage: slider V [V ...]  (0 = newest, {} = oldest)",
                    timeline.slider().max());
                return;
            }
        }
    }
    if !fed {
        println!("usage: slider V [V ...]");
        return;
    }
    while let Some(deadline) = timeline.pending_deadline() {
        let wait = deadline.duration_since(Timestamp::now());
        std::thread::sleep(Duration::try_from(wait).unwrap_or_default());
        timeline.poll(Timestamp::now());
    }
}

fn print_status<L: OverlayLoader>(timeline: &Timeline<L>) {
    let (year, month, day) = timeline.picker().selected();
    println!(
        "{}  [slider {}/{}]  [picker {year:04}-{month:02}-{day:02}]",
        timeline.date_label().text(),
        timeline.slider().value(),
        timeline.slider().max(),
    );
}

fn print_help() {
    println!(
        "\
commands:
  show               print the current selection
  newest | oldest    jump to an end of the timeline
  next | prev        step one week later / earlier
  slider V [V ...]   drag the slider (value 0 = newest); debounced
  date YYYY-MM-DD    select an exact release date
  year YYYY          pick a year (first available month/day)
  month M            pick a month in the selected year (first available day)
  day D              pick a day in the selected year/month
  quit               exit"
    );
}
