use console::style;

use crate::sentiment::{Scores, Sentiment, SentimentResult};

const BAR_WIDTH: usize = 30;

pub struct OutputHandler {
    debug: bool,
}

impl OutputHandler {
    pub fn new() -> Self {
        Self { debug: false }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn print_banner(&mut self) {
        let line = "═".repeat(68);
        println!("{}", style(format!("╔{line}╗")).cyan().bold());
        println!(
            "{} {} {}",
            style("║").cyan().bold(),
            style(center("Sentiment Analyzer 情緒分析器 (繁體中文 + English)", 66)).bold(),
            style("║").cyan().bold()
        );
        println!("{}", style(format!("╚{line}╝")).cyan().bold());
        println!("{}", style("- Type one sentence per line to analyze sentiment.").bold());
        println!("- 每次輸入一句話以進行情緒分析（輸出為繁體中文 + 英文）。");
        println!("- Press Ctrl+C or Ctrl+D to exit.");
        println!("- 按 Ctrl+C 或 Ctrl+D 離開。");
    }

    pub fn print_result(&mut self, result: &SentimentResult) {
        if self.debug {
            eprintln!("DEBUG: normalized result: {result:?}");
        }

        let label_line = format!("▶ Overall / 總體判定: {} {}", result.label, result.label.emoji());
        let styled_label = match result.label {
            Sentiment::Positive => style(label_line).green().bold(),
            Sentiment::Neutral => style(label_line).yellow().bold(),
            Sentiment::Negative => style(label_line).red().bold(),
        };
        println!("\n{styled_label}");

        let Scores {
            positive_pct: p,
            neutral_pct: n,
            negative_pct: neg,
        } = result.scores;
        println!(
            "{}: {} | {} | {}",
            style("Scores / 百分比").bold(),
            style(format!("Pos {p}%")).green(),
            style(format!("Neu {n}%")).yellow(),
            style(format!("Neg {neg}%")).red(),
        );
        println!("[{}]", self.scores_bar(result.scores));

        println!("\n{}", style("繁體中文分析").cyan().bold());
        println!(
            "{}",
            if result.analysis_zh_hant.is_empty() {
                "（無）"
            } else {
                &result.analysis_zh_hant
            }
        );
        println!("\n{}", style("English Analysis").cyan().bold());
        println!(
            "{}",
            if result.analysis_en.is_empty() {
                "(None)"
            } else {
                &result.analysis_en
            }
        );

        if !result.caveats.is_empty() {
            println!("\n{}", style("備註 / Caveats").magenta().bold());
            println!("{}", result.caveats);
        }

        println!("{}", style("-".repeat(72)).cyan());
    }

    /// Three colored segments proportional to the percentages. Rounding here
    /// is independent of the normalizer: green and yellow round to nearest,
    /// red takes whatever cells remain.
    fn scores_bar(&self, scores: Scores) -> String {
        let (p_len, n_len) = bar_segments(scores, BAR_WIDTH);
        let neg_len = BAR_WIDTH - p_len - n_len;
        format!(
            "{}{}{}",
            style("█".repeat(p_len)).green(),
            style("█".repeat(n_len)).yellow(),
            style("█".repeat(neg_len)).red(),
        )
    }

    pub fn print_system(&mut self, message: &str) {
        println!("{}", style(message).yellow().dim());
    }

    pub fn print_error(&mut self, message: &str) {
        eprintln!("{} {}", style("Error / 錯誤:").red().bold(), message);
    }

    pub fn print_empty_input(&mut self) {
        println!(
            "{}",
            style("Input is empty. Please try again. / 輸入為空，請再試一次。").yellow()
        );
    }

    pub fn print_goodbye(&mut self) {
        println!("{}", style("Bye! 感謝使用，再見！").cyan());
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn bar_segments(scores: Scores, width: usize) -> (usize, usize) {
    let total = scores.positive_pct + scores.neutral_pct + scores.negative_pct;
    if total == 0 {
        return (width / 3, width / 3);
    }
    let p_len = (scores.positive_pct as f64 / 100.0 * width as f64).round() as usize;
    let n_len = (scores.neutral_pct as f64 / 100.0 * width as f64).round() as usize;
    // Clamp so the red segment never underflows on rounding pile-up
    let p_len = p_len.min(width);
    let n_len = n_len.min(width - p_len);
    (p_len, n_len)
}

fn center(text: &str, width: usize) -> String {
    let len = console::measure_text_width(text);
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bar_segments_round_and_let_red_absorb_the_rest() {
        let scores = Scores {
            positive_pct: 33,
            neutral_pct: 33,
            negative_pct: 34,
        };
        // round(33/100*30) = 10 for both, red gets the remaining 10 cells
        assert_eq!(bar_segments(scores, 30), (10, 10));
    }

    #[test]
    fn bar_segments_split_evenly_for_all_zero_scores() {
        let scores = Scores {
            positive_pct: 0,
            neutral_pct: 0,
            negative_pct: 0,
        };
        assert_eq!(bar_segments(scores, 30), (10, 10));
    }

    #[test]
    fn system_and_error_lines_do_not_panic() {
        let mut output = OutputHandler::new().with_debug(true);
        output.print_system("Using model test-model via http://localhost");
        output.print_error("connection refused");
    }

    #[test]
    fn bar_segments_never_exceed_width() {
        let scores = Scores {
            positive_pct: 52,
            neutral_pct: 52,
            negative_pct: 0,
        };
        let (p, n) = bar_segments(scores, 30);
        assert!(p + n <= 30);
    }
}
