//! Interactive terminal wizard.

use super::setup::{load_config, open_generator, open_store};
use concierge::{PlanSimulator, Wizard, WizardPhase, WizardSnapshot};
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Line-oriented prompt on stdin.
struct Terminal {
    lines: Lines<BufReader<Stdin>>,
}

impl Terminal {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Print `prompt` and read one trimmed line, `None` at end of input.
    async fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        print!("{} > ", prompt);
        std::io::stdout().flush()?;
        Ok(self
            .lines
            .next_line()
            .await?
            .map(|line| line.trim().to_string()))
    }
}

fn print_open_step(snapshot: &WizardSnapshot, step: usize) {
    let Some(open) = snapshot.history().last() else {
        return;
    };
    println!();
    println!("[{}/{}] {}", step, snapshot.step_budget(), open.question());
    for (i, choice) in open.choices().iter().enumerate() {
        println!("  {}. {} {}", i + 1, choice.icon(), choice.text());
    }
}

/// Run the wizard until the user quits or input ends.
pub async fn run_wizard(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let generator = open_generator(&config.generator)?;
    let store = open_store(&config.store).await?;

    let mut wizard = Wizard::new(generator, store, PlanSimulator, &config);
    let mut terminal = Terminal::new();
    let mut snapshot = wizard.start();

    loop {
        match *snapshot.phase() {
            WizardPhase::Collecting { step } => {
                print_open_step(&snapshot, step);
                let Some(answer) = terminal.ask("番号を選んでください (b: 戻る, q: 終了)").await?
                else {
                    break;
                };

                let outcome = match answer.as_str() {
                    "q" => break,
                    "b" => wizard.go_back(),
                    number => {
                        let choice = number
                            .parse::<usize>()
                            .ok()
                            .and_then(|n| n.checked_sub(1))
                            .and_then(|i| snapshot.history().last()?.choices().get(i))
                            .map(|c| c.text().clone());
                        match choice {
                            Some(text) => {
                                println!("考え中...");
                                wizard.select_choice(step - 1, &text).await
                            }
                            None => {
                                println!("1から4の番号を入力してください。");
                                continue;
                            }
                        }
                    }
                };

                match outcome {
                    Ok(next) => snapshot = next,
                    Err(e) if e.is_configuration() => return Err(e.into()),
                    Err(e) => println!("うまくいきませんでした: {}", e),
                }
            }

            WizardPhase::AwaitingLocality => {
                let Some(answer) = terminal
                    .ask("郵便番号を7桁の数字で入力してください (b: 戻る)")
                    .await?
                else {
                    break;
                };

                let outcome = if answer == "b" {
                    wizard.cancel_locality()
                } else {
                    wizard.submit_locality(&answer)
                };
                match outcome {
                    Ok(next) => snapshot = next,
                    Err(e) => println!("{}", e),
                }
            }

            WizardPhase::Finalized => {
                if let Some(goal) = snapshot.goal() {
                    println!();
                    println!("目標: {}", goal.path());
                }
                snapshot = wizard.execute()?;
            }

            WizardPhase::Executing => {
                anyhow::bail!("wizard stopped while executing");
            }

            WizardPhase::Completed => {
                if let Some(result) = snapshot.result() {
                    println!();
                    println!("{}", result.narrative());
                }
                match terminal.ask("r: もう一度, q: 終了").await?.as_deref() {
                    Some("r") => snapshot = wizard.reset(),
                    _ => break,
                }
            }
        }
    }

    Ok(())
}
