use clap::Subcommand;
use studyflow_core::timer::{format_mm_ss, render_bar};
use studyflow_core::{
    run_countdown, Config, CountdownOutcome, Event, ManualScheduler, TimerEngine, TokioScheduler,
};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run a real-time countdown (Ctrl-C pauses and exits)
    Run {
        /// Duration in seconds (defaults to timer.focus_secs)
        #[arg(long)]
        seconds: Option<u64>,
        /// Print events as JSON lines instead of a progress line
        #[arg(long)]
        json: bool,
    },
    /// Drive the timer with a scripted tick sequence and print the events
    Simulate {
        /// Duration in seconds (defaults to timer.focus_secs)
        #[arg(long)]
        seconds: Option<u64>,
        /// Comma-separated steps: start, pause, tick, tick*N, reset, reset=N
        #[arg(long, default_value = "start")]
        ops: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Start,
    Pause,
    Tick(usize),
    Reset(Option<u64>),
}

fn parse_ops(script: &str) -> Result<Vec<Op>, String> {
    script
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|step| match step {
            "start" => Ok(Op::Start),
            "pause" => Ok(Op::Pause),
            "tick" => Ok(Op::Tick(1)),
            "reset" => Ok(Op::Reset(None)),
            _ => {
                if let Some(n) = step.strip_prefix("tick*") {
                    n.parse().map(Op::Tick).map_err(|_| format!("bad tick count in '{step}'"))
                } else if let Some(n) = step.strip_prefix("reset=") {
                    n.parse()
                        .map(|n| Op::Reset(Some(n)))
                        .map_err(|_| format!("bad reset duration in '{step}'"))
                } else {
                    Err(format!("unknown step '{step}'"))
                }
            }
        })
        .collect()
}

fn print_progress(event: &Event, total_secs: u64) {
    match event {
        Event::TimerStarted { remaining_secs, .. } | Event::TimerPaused { remaining_secs, .. } => {
            let progress = (total_secs - remaining_secs) as f64 / total_secs as f64;
            println!("{}  {}", format_mm_ss(*remaining_secs), render_bar(progress, 30));
        }
        Event::TimerTicked {
            remaining_secs,
            progress,
            ..
        } => println!("{}  {}", format_mm_ss(*remaining_secs), render_bar(*progress, 30)),
        Event::TimerCompleted { .. } => println!("00:00  {}  done", render_bar(1.0, 30)),
        _ => {}
    }
}

fn run_real_time(total_secs: u64, json: bool, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let (scheduler, mut ticks) = TokioScheduler::channel();
        let mut engine = TimerEngine::new(total_secs, scheduler)?
            .with_tick_interval(config.timer.tick_interval());

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
        };
        let outcome = run_countdown(&mut engine, &mut ticks, shutdown, |event| {
            if json {
                match serde_json::to_string(event) {
                    Ok(line) => println!("{line}"),
                    Err(e) => tracing::warn!("failed to encode event: {e}"),
                }
            } else {
                print_progress(event, total_secs);
            }
        })
        .await;

        if let CountdownOutcome::Interrupted { remaining_secs } = outcome {
            eprintln!("paused with {} left", format_mm_ss(remaining_secs));
        }
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}

fn simulate(total_secs: u64, script: &str) -> Result<(), Box<dyn std::error::Error>> {
    let ops = parse_ops(script)?;
    let mut engine = TimerEngine::new(total_secs, ManualScheduler::new())?;
    let mut events = Vec::new();

    for op in ops {
        match op {
            Op::Start => events.extend(engine.start()),
            Op::Pause => events.extend(engine.pause()),
            Op::Tick(n) => events.extend(engine.advance(n)),
            Op::Reset(total) => events.push(engine.reset(total.unwrap_or(engine.total_secs()))?),
        }
    }
    events.push(engine.snapshot());

    println!("{}", serde_json::to_string_pretty(&events)?);
    Ok(())
}

pub fn run(action: TimerAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Run { seconds, json } => {
            run_real_time(seconds.unwrap_or(config.timer.focus_secs), json, config)
        }
        TimerAction::Simulate { seconds, ops } => {
            simulate(seconds.unwrap_or(config.timer.focus_secs), &ops)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scripts() {
        assert_eq!(
            parse_ops("start, tick*3,pause,tick,reset=10,reset").unwrap(),
            vec![
                Op::Start,
                Op::Tick(3),
                Op::Pause,
                Op::Tick(1),
                Op::Reset(Some(10)),
                Op::Reset(None)
            ]
        );
    }

    #[test]
    fn rejects_unknown_steps() {
        assert!(parse_ops("start,jump").is_err());
        assert!(parse_ops("tick*x").is_err());
        assert!(parse_ops("reset=-1").is_err());
    }
}
