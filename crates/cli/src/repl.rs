//! Interactive loop: quick picks, help, quit, and free-text prompts.

use std::io::{BufRead, Write};

use serde_json::Value;

use pmm_agent::Conversation;
use pmm_common::Result as PmmResult;
use pmm_tools::{
    AntiPatternScanInput, CompetitorHomepageInput, CompleteAuditInput, FiveSecondTestInput,
    MessagingFrameworkInput, PositioningCanvasInput, Template, ToolKind,
};

const RULE: &str = "------------------------------------------------------------";
const BANNER: &str = "============================================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickPick {
    AnalyzeHomepage,
    FiveSecondTest,
    AntiPatterns,
    PositioningCanvas,
    MessagingFramework,
    CompetitorCompare,
}

impl QuickPick {
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(QuickPick::AnalyzeHomepage),
            "2" => Some(QuickPick::FiveSecondTest),
            "3" => Some(QuickPick::AntiPatterns),
            "4" => Some(QuickPick::PositioningCanvas),
            "5" => Some(QuickPick::MessagingFramework),
            "6" => Some(QuickPick::CompetitorCompare),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Skip,
    Pick(QuickPick),
    Prompt(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let lowered = line.to_ascii_lowercase();
        match lowered.as_str() {
            "exit" | "quit" | "q" | "bye" => Command::Quit,
            "" => Command::Skip,
            "help" | "?" | "h" => Command::Help,
            _ => QuickPick::from_choice(line)
                .map(Command::Pick)
                .unwrap_or_else(|| Command::Prompt(line.to_string())),
        }
    }
}

pub struct Repl<'a, R, W> {
    agent: &'a dyn Conversation,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Repl<'a, R, W> {
    pub fn new(agent: &'a dyn Conversation, input: R, output: W) -> Self {
        Self {
            agent,
            input,
            output,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.print_welcome()?;

        loop {
            let Some(line) = self.ask("You: ")? else {
                break;
            };
            match Command::parse(&line) {
                Command::Quit => break,
                Command::Skip => continue,
                Command::Help => self.print_welcome()?,
                Command::Pick(pick) => {
                    if let Some((kind, args)) = self.quick_pick(pick)? {
                        writeln!(self.output, "\nAnalyzing...\n")?;
                        let result = self.agent.invoke_tool(kind, args).await;
                        self.report(result)?;
                    }
                }
                Command::Prompt(prompt) => {
                    writeln!(self.output, "\nAnalyzing...\n")?;
                    let result = self.agent.invoke(&prompt).await;
                    self.report(result)?;
                }
            }
        }

        writeln!(self.output, "\nGoodbye!")?;
        Ok(())
    }

    /// Collects the pick's inputs into template arguments; `None` when a
    /// required one was left empty.
    fn quick_pick(&mut self, pick: QuickPick) -> anyhow::Result<Option<(ToolKind, Value)>> {
        let args = match pick {
            QuickPick::AnalyzeHomepage => self
                .require("Enter homepage URL: ", "No URL provided.")?
                .map(|url| {
                    template_args(&CompleteAuditInput::new(url.as_str()).with_asset_url(url))
                })
                .transpose()?,
            QuickPick::FiveSecondTest => self
                .require("Enter URL to test: ", "No URL provided.")?
                .map(|url| template_args(&FiveSecondTestInput::new(url)))
                .transpose()?,
            QuickPick::AntiPatterns => self
                .require("Enter URL to scan: ", "No URL provided.")?
                .map(|url| template_args(&AntiPatternScanInput::new(url)))
                .transpose()?,
            QuickPick::PositioningCanvas => {
                match self.require("Describe your product: ", "No product description provided.")? {
                    Some(product) => {
                        let audience = self.ask("Who is it for? (optional): ")?.unwrap_or_default();
                        let competitors = self
                            .ask("Competitors? (optional, comma-separated): ")?
                            .unwrap_or_default();

                        let mut input = PositioningCanvasInput::new(product);
                        if !audience.is_empty() {
                            input = input.with_target_audience(audience);
                        }
                        let competitors: Vec<String> = competitors
                            .split(',')
                            .map(str::trim)
                            .filter(|name| !name.is_empty())
                            .map(String::from)
                            .collect();
                        if !competitors.is_empty() {
                            input = input.with_known_competitors(competitors);
                        }
                        Some(template_args(&input)?)
                    }
                    None => None,
                }
            }
            QuickPick::MessagingFramework => self
                .require(
                    "Describe your product or paste its positioning: ",
                    "No product description provided.",
                )?
                .map(|positioning| template_args(&MessagingFrameworkInput::new(positioning)))
                .transpose()?,
            QuickPick::CompetitorCompare => {
                let yours = self.ask("Your homepage URL: ")?.unwrap_or_default();
                let theirs = self.ask("Competitor URL: ")?.unwrap_or_default();
                if yours.is_empty() || theirs.is_empty() {
                    writeln!(self.output, "Both URLs are required.")?;
                    None
                } else {
                    Some(template_args(
                        &CompetitorHomepageInput::new(theirs).with_your_url(yours),
                    )?)
                }
            }
        };
        Ok(args)
    }

    fn report(&mut self, result: PmmResult<String>) -> anyhow::Result<()> {
        match result {
            Ok(reply) => writeln!(self.output, "{reply}\n")?,
            Err(e) => {
                tracing::warn!(error = %e, "Turn failed");
                writeln!(self.output, "\nError: {e}\n")?;
            }
        }
        Ok(())
    }

    /// Prints `label` and reads one trimmed line; `None` at end of input.
    fn ask(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn require(&mut self, label: &str, missing: &str) -> anyhow::Result<Option<String>> {
        match self.ask(label)? {
            Some(value) if !value.is_empty() => Ok(Some(value)),
            _ => {
                writeln!(self.output, "{missing}")?;
                Ok(None)
            }
        }
    }

    fn print_welcome(&mut self) -> anyhow::Result<()> {
        let out = &mut self.output;
        writeln!(out, "\n{BANNER}")?;
        writeln!(out, "  PMM Agent - Product Marketing Evaluator")?;
        writeln!(out, "{BANNER}\n")?;
        writeln!(out, "Evaluate positioning, messaging, and marketing assets")?;
        writeln!(out, "using proven PMM frameworks (April Dunford, Fletch PMM).\n")?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "Quick picks (type the number):\n")?;
        writeln!(out, "  1. Analyze a homepage URL")?;
        writeln!(out, "  2. Run a 5-second test")?;
        writeln!(out, "  3. Detect anti-patterns")?;
        writeln!(out, "  4. Create positioning canvas")?;
        writeln!(out, "  5. Build messaging framework")?;
        writeln!(out, "  6. Compare against competitor\n")?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "Or just type a question in plain English.")?;
        writeln!(out, "Type 'help' for examples, 'quit' to exit.")?;
        writeln!(out, "{BANNER}\n")?;
        Ok(())
    }
}

/// A template input paired with the tool it renders.
fn template_args<T: Template>(input: &T) -> PmmResult<(ToolKind, Value)> {
    Ok((T::KIND, serde_json::to_value(input)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pmm_common::{PmmError, Result};
    use std::sync::Mutex;

    #[derive(Default)]
    struct EchoAgent {
        prompts: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl Conversation for EchoAgent {
        async fn invoke(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail {
                return Err(PmmError::Llm("connection reset".into()));
            }
            Ok(format!("reply to: {prompt}"))
        }
    }

    async fn session(agent: &EchoAgent, script: &str) -> String {
        let mut output = Vec::new();
        Repl::new(agent, script.as_bytes(), &mut output)
            .run()
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn command_parsing() {
        assert_eq!(Command::parse("  QUIT "), Command::Quit);
        assert_eq!(Command::parse("bye"), Command::Quit);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse(""), Command::Skip);
        assert_eq!(Command::parse("4"), Command::Pick(QuickPick::PositioningCanvas));
        assert_eq!(Command::parse("7"), Command::Prompt("7".into()));
        assert_eq!(
            Command::parse("Audit acme.example"),
            Command::Prompt("Audit acme.example".into())
        );
    }

    #[tokio::test]
    async fn free_text_goes_to_the_agent() {
        let agent = EchoAgent::default();
        let output = session(&agent, "Is our hero clear?\nquit\n").await;
        assert_eq!(agent.prompts.lock().unwrap().as_slice(), ["Is our hero clear?"]);
        assert!(output.contains("reply to: Is our hero clear?"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn empty_quick_pick_input_returns_to_the_loop() {
        let agent = EchoAgent::default();
        let output = session(&agent, "1\n\nq\n").await;
        assert!(output.contains("No URL provided."));
        assert!(agent.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn positioning_pick_collects_optional_answers() {
        let agent = EchoAgent::default();
        session(&agent, "4\nExpense tool\n\nExpensify, spreadsheets\nexit\n").await;
        let prompts = agent.prompts.lock().unwrap();
        assert!(prompts[0].starts_with("## TASK: create_positioning_canvas\n"));
        assert!(prompts[0].contains("Product: Expense tool\nCompetitors: Expensify, spreadsheets"));
        assert!(prompts[0].contains("\"target_audience\": null"));
    }

    #[tokio::test]
    async fn five_second_pick_sends_the_rendered_template() {
        let agent = EchoAgent::default();
        session(&agent, "2\n<h1>Acme</h1>\nquit\n").await;
        let prompts = agent.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].starts_with("## TASK: five_second_test\n"));
        assert!(prompts[0].contains("Quote the text that tells you (or note its absence)"));
        assert!(prompts[0].contains("\"asset_content\": \"<h1>Acme</h1>\""));
    }

    #[tokio::test]
    async fn competitor_pick_renders_the_comparison() {
        let agent = EchoAgent::default();
        session(&agent, "6\nhttps://mine.example\nhttps://rival.example\nquit\n").await;
        let prompts = agent.prompts.lock().unwrap();
        assert!(prompts[0].contains("Analyze competitor homepage: https://rival.example"));
        assert!(prompts[0].contains("Compare against your site: https://mine.example"));
    }

    #[tokio::test]
    async fn competitor_pick_needs_both_urls() {
        let agent = EchoAgent::default();
        let output = session(&agent, "6\nhttps://mine.example\n\nquit\n").await;
        assert!(output.contains("Both URLs are required."));
        assert!(agent.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn errors_are_printed_and_the_loop_continues() {
        let agent = EchoAgent {
            fail: true,
            ..EchoAgent::default()
        };
        let output = session(&agent, "first\nsecond\nquit\n").await;
        assert_eq!(output.matches("Error: LLM error: connection reset").count(), 2);
    }

    #[tokio::test]
    async fn end_of_input_quits() {
        let agent = EchoAgent::default();
        let output = session(&agent, "help\n").await;
        assert_eq!(output.matches("Quick picks").count(), 2);
        assert!(output.ends_with("Goodbye!\n"));
    }
}
