use anyhow::Result;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};

use crate::api::ChatClient;
use crate::output::OutputHandler;
use crate::prompt::build_messages;
use crate::sentiment::normalize;

const PROMPT_EN: &str = "Enter a line to analyze";
const PROMPT_ZH: &str = "請輸入要分析的句子";

/// The interactive read-eval loop: one sentence in, one rendered sentiment
/// judgment out, until end-of-input or interrupt.
pub struct App {
    client: Box<dyn ChatClient>,
    output: OutputHandler,
    editor: Reedline,
    /// Alternates the prompt language per turn. Cosmetic only.
    turn: usize,
}

impl App {
    pub fn new(client: Box<dyn ChatClient>, output: OutputHandler) -> Self {
        Self {
            client,
            output,
            editor: Reedline::create(),
            turn: 0,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.output.print_banner();

        loop {
            let prompt_text = if self.turn % 2 == 0 { PROMPT_EN } else { PROMPT_ZH };
            let prompt = DefaultPrompt::new(
                DefaultPromptSegment::Basic(prompt_text.to_string()),
                DefaultPromptSegment::Empty,
            );

            match self.editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    self.turn += 1;
                    let text = line.trim().to_string();
                    if text.is_empty() {
                        self.output.print_empty_input();
                        continue;
                    }
                    self.analyze_turn(&text).await;
                }
                Signal::CtrlC | Signal::CtrlD => {
                    self.output.print_goodbye();
                    return Ok(());
                }
            }
        }
    }

    /// One request/response cycle. Transport errors are reported inline and
    /// the loop moves on; a malformed model reply never surfaces as an error
    /// because normalization is total.
    async fn analyze_turn(&mut self, text: &str) {
        match self.client.complete(build_messages(text)).await {
            Ok(raw) => {
                let result = normalize(&raw);
                self.output.print_result(&result);
            }
            Err(err) => self.output.print_error(&format!("{err:#}")),
        }
    }
}
