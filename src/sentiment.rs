use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum number of characters of raw model output echoed into `caveats`
/// when a response cannot be parsed.
const RAW_SNIPPET_LIMIT: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn emoji(&self) -> &'static str {
        match self {
            Sentiment::Positive => "😀",
            Sentiment::Neutral => "😐",
            Sentiment::Negative => "😠",
        }
    }

    /// Parse a label string asserted by the model. Unrecognized labels are
    /// rejected so a tie can never smuggle an arbitrary string into the result.
    fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "neutral" => Some(Sentiment::Neutral),
            "negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Neutral => write!(f, "Neutral"),
            Sentiment::Negative => write!(f, "Negative"),
        }
    }
}

/// Integer percentages for the three sentiment buckets.
/// Always sums to exactly 100 in any result produced by [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub positive_pct: u32,
    pub neutral_pct: u32,
    pub negative_pct: u32,
}

/// One validated sentiment judgment, constructed fresh per input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: Sentiment,
    pub scores: Scores,
    pub analysis_zh_hant: String,
    pub analysis_en: String,
    pub caveats: String,
}

/// Shape we hope the model returned. Scores are kept as raw JSON values so
/// integer, float, and numeric-string percentages can all be coerced the same
/// way; anything else routes the whole payload to the fallback path.
#[derive(Debug, Deserialize)]
struct RawPayload {
    label: Option<String>,
    scores: Option<RawScores>,
    analysis_zh_hant: Option<String>,
    analysis_en: Option<String>,
    caveats: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawScores {
    positive_pct: Option<Value>,
    neutral_pct: Option<Value>,
    negative_pct: Option<Value>,
}

/// Repair an arbitrary model reply into a valid [`SentimentResult`].
///
/// Total over all string inputs: malformed JSON, wrong shapes, and
/// uncoercible scores all resolve to a fixed neutral fallback that carries a
/// truncated copy of the raw text in `caveats` for diagnostics. No error ever
/// reaches the caller.
pub fn normalize(raw: &str) -> SentimentResult {
    match parse_payload(raw) {
        Some(result) => result,
        None => fallback(raw),
    }
}

fn parse_payload(raw: &str) -> Option<SentimentResult> {
    let payload: RawPayload = serde_json::from_str(raw).ok()?;

    let (p, n, neg) = match &payload.scores {
        Some(s) => (
            coerce_pct(s.positive_pct.as_ref())?,
            coerce_pct(s.neutral_pct.as_ref())?,
            coerce_pct(s.negative_pct.as_ref())?,
        ),
        None => (0, 0, 0),
    };
    let scores = repair_scores(p, n, neg);
    let label = derive_label(scores, payload.label.as_deref());

    Some(SentimentResult {
        label,
        scores,
        analysis_zh_hant: payload.analysis_zh_hant.unwrap_or_default(),
        analysis_en: payload.analysis_en.unwrap_or_default(),
        caveats: payload.caveats.unwrap_or_default(),
    })
}

/// Read one percentage field as a non-negative integer. A missing field is 0;
/// floats truncate; numeric strings parse. Anything else (null, bool, nested
/// structure, non-numeric string) is a parse failure for the whole payload.
fn coerce_pct(value: Option<&Value>) -> Option<u64> {
    let value = match value {
        Some(v) => v,
        None => return Some(0),
    };
    let n = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    // The emitted result is non-negative by contract; clamp before repair.
    Some(n.max(0) as u64)
}

/// Force the three percentages to sum to exactly 100.
///
/// A zero total becomes `{34, 33, 33}` — the extra point goes to the positive
/// bucket on purpose, so the no-information case breaks ties deterministically.
/// Any other total rescales positive and neutral with floor division and lets
/// the negative bucket absorb all rounding error. The order is fixed; numeric
/// reproducibility depends on it.
fn repair_scores(p: u64, n: u64, neg: u64) -> Scores {
    // Widened so three i64::MAX-sized scores cannot overflow the sum
    let total = p as u128 + n as u128 + neg as u128;
    if total == 100 {
        return Scores {
            positive_pct: p as u32,
            neutral_pct: n as u32,
            negative_pct: neg as u32,
        };
    }
    if total == 0 {
        return Scores {
            positive_pct: 34,
            neutral_pct: 33,
            negative_pct: 33,
        };
    }
    let rp = (p as u128 * 100 / total) as u32;
    let rn = (n as u128 * 100 / total) as u32;
    Scores {
        positive_pct: rp,
        neutral_pct: rn,
        negative_pct: 100 - rp - rn,
    }
}

/// Argmax over the repaired scores. The computed label wins whenever the
/// maximum is unambiguous; on a tie we fall back to whatever label the model
/// asserted, and to Neutral when that is absent or not one of the three
/// categories.
fn derive_label(scores: Scores, asserted: Option<&str>) -> Sentiment {
    let Scores {
        positive_pct: p,
        neutral_pct: n,
        negative_pct: neg,
    } = scores;
    if p > n && p > neg {
        Sentiment::Positive
    } else if n > p && n > neg {
        Sentiment::Neutral
    } else if neg > p && neg > n {
        Sentiment::Negative
    } else {
        asserted
            .and_then(Sentiment::from_label)
            .unwrap_or(Sentiment::Neutral)
    }
}

fn fallback(raw: &str) -> SentimentResult {
    let snippet: String = raw.chars().take(RAW_SNIPPET_LIMIT).collect();
    SentimentResult {
        label: Sentiment::Neutral,
        scores: Scores {
            positive_pct: 33,
            neutral_pct: 34,
            negative_pct: 33,
        },
        analysis_zh_hant: "無法解析模型回應格式，暫以中性評估並給出保守分數。".to_string(),
        analysis_en: "Could not parse model response. Returning a conservative neutral assessment."
            .to_string(),
        caveats: format!("Raw model output: {snippet}"),
    }
}
