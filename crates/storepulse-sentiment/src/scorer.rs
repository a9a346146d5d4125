//! Review sentiment scoring.
//!
//! A [`PolarityEstimator`] maps text to a polarity in `[-1.0, 1.0]`;
//! [`sentiment_score`] rescales that to `[0.0, 1.0]` and falls back to
//! neutral whenever the estimator cannot produce a usable value.

use crate::error::SentimentError;

/// Score given to empty text and to any estimator failure.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Polarity weights for words common in streaming-app reviews.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("awesome", 1.0),
    ("amazing", 0.6),
    ("best", 1.0),
    ("better", 0.5),
    ("perfect", 1.0),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("superb", 1.0),
    ("love", 0.5),
    ("loved", 0.7),
    ("loving", 0.6),
    ("nice", 0.6),
    ("beautiful", 0.85),
    ("happy", 0.8),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("fun", 0.3),
    ("cool", 0.35),
    ("easy", 0.43),
    ("smooth", 0.4),
    ("fast", 0.2),
    ("stable", 0.3),
    ("reliable", 0.5),
    ("helpful", 0.5),
    ("convenient", 0.4),
    ("recommend", 0.3),
    ("worth", 0.3),
    ("satisfied", 0.5),
    ("fine", 0.4),
    ("ok", 0.5),
    ("okay", 0.5),
    ("clear", 0.1),
    // Negative signals
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("horrible", -1.0),
    ("awful", -1.0),
    ("pathetic", -1.0),
    ("boring", -1.0),
    ("poor", -0.4),
    ("useless", -0.5),
    ("unusable", -0.7),
    ("annoying", -0.8),
    ("frustrating", -0.6),
    ("disappointing", -0.6),
    ("disappointed", -0.75),
    ("hate", -0.8),
    ("stupid", -0.8),
    ("ridiculous", -0.33),
    ("crap", -0.8),
    ("scam", -0.8),
    ("waste", -0.2),
    ("sad", -0.5),
    ("difficult", -0.5),
    ("expensive", -0.5),
    ("slow", -0.3),
    ("laggy", -0.5),
    ("buggy", -0.5),
    ("glitchy", -0.5),
    ("broken", -0.4),
    ("unstable", -0.4),
    ("frozen", -0.3),
    ("freezes", -0.4),
    ("crashes", -0.5),
    ("crashing", -0.5),
    ("error", -0.3),
];

/// Words that scale the polarity of the word right after them.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.2),
    ("too", 1.2),
    ("super", 1.3),
    ("extremely", 1.5),
    ("totally", 1.3),
    ("absolutely", 1.4),
    ("quite", 1.1),
];

/// Words that flip and dampen what follows.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "cannot", "cant", "dont", "doesnt", "didnt",
    "isnt", "wasnt", "wont", "aint",
];

/// Stems of "n't" contractions. Cleaning turns "don't" into "don t", so a
/// `t` only negates when one of these comes right before it.
const CONTRACTION_STEMS: &[&str] = &[
    "don", "doesn", "didn", "isn", "wasn", "aren", "weren", "can", "couldn", "won", "wouldn",
    "shouldn", "haven", "hasn", "hadn", "ain",
];

const NEGATION_FACTOR: f64 = -0.5;

/// Produces a polarity in `[-1.0, 1.0]` for a piece of text.
pub trait PolarityEstimator {
    /// # Errors
    ///
    /// Implementations return [`SentimentError::Estimator`] when the text
    /// cannot be scored.
    fn polarity(&self, text: &str) -> Result<f64, SentimentError>;
}

/// Lexicon estimator: the mean polarity of the lexicon words found, with
/// intensifier and negation handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconPolarity;

impl PolarityEstimator for LexiconPolarity {
    fn polarity(&self, text: &str) -> Result<f64, SentimentError> {
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect();

        let mut hits: Vec<f64> = Vec::new();
        for (i, token) in tokens.iter().enumerate() {
            let Some(mut value) = lookup(LEXICON, token) else {
                continue;
            };

            // Index of the first token in front of the modified phrase.
            let mut head = i;
            if let Some(factor) = i
                .checked_sub(1)
                .and_then(|prev| lookup(INTENSIFIERS, &tokens[prev]))
            {
                value *= factor;
                head = i - 1;
            }
            if head > 0 && is_negator(&tokens, head - 1) {
                value *= NEGATION_FACTOR;
            }

            hits.push(value.clamp(-1.0, 1.0));
        }

        if hits.is_empty() {
            return Ok(0.0);
        }

        #[allow(clippy::cast_precision_loss)]
        let mean = hits.iter().sum::<f64>() / hits.len() as f64;
        Ok(mean.clamp(-1.0, 1.0))
    }
}

fn is_negator(tokens: &[String], i: usize) -> bool {
    match tokens[i].as_str() {
        "t" => i > 0 && CONTRACTION_STEMS.contains(&tokens[i - 1].as_str()),
        word => NEGATORS.contains(&word),
    }
}

fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
    table
        .iter()
        .find(|(entry, _)| *entry == word)
        .map(|&(_, weight)| weight)
}

/// Scores cleaned review text on `[0.0, 1.0]`, rounded to three decimals.
///
/// Empty text, an estimator error, and a polarity that is non-finite or
/// outside `[-1.0, 1.0]` all score [`NEUTRAL_SCORE`].
#[must_use]
pub fn sentiment_score<E>(estimator: &E, text: &str) -> f64
where
    E: PolarityEstimator + ?Sized,
{
    if text.is_empty() {
        return NEUTRAL_SCORE;
    }

    match checked_polarity(estimator, text) {
        Ok(polarity) => round3(((polarity + 1.0) / 2.0).clamp(0.0, 1.0)),
        Err(e) => {
            tracing::debug!(error = %e, "polarity unavailable, scoring neutral");
            NEUTRAL_SCORE
        }
    }
}

fn checked_polarity<E>(estimator: &E, text: &str) -> Result<f64, SentimentError>
where
    E: PolarityEstimator + ?Sized,
{
    let polarity = estimator.polarity(text)?;
    if !polarity.is_finite() || !(-1.0..=1.0).contains(&polarity) {
        return Err(SentimentError::OutOfRange(polarity));
    }
    Ok(polarity)
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl PolarityEstimator for Fixed {
        fn polarity(&self, _text: &str) -> Result<f64, SentimentError> {
            Ok(self.0)
        }
    }

    struct Failing;

    impl PolarityEstimator for Failing {
        fn polarity(&self, _text: &str) -> Result<f64, SentimentError> {
            Err(SentimentError::Estimator("model unavailable".to_string()))
        }
    }

    fn polarity(text: &str) -> f64 {
        LexiconPolarity.polarity(text).unwrap()
    }

    #[test]
    fn unknown_words_are_neutral() {
        assert_eq!(polarity("the app opens"), 0.0);
        assert_eq!(polarity(""), 0.0);
    }

    #[test]
    fn positive_and_negative_words() {
        assert!(polarity("great app") > 0.0);
        assert!(polarity("terrible app") < 0.0);
    }

    #[test]
    fn polarity_is_mean_of_hits() {
        // good 0.7, bad -0.7
        assert!(polarity("good but bad").abs() < 1e-9);
    }

    #[test]
    fn intensifier_scales_next_word() {
        assert!(polarity("very good") > polarity("good"));
        assert!(polarity("really slow") < polarity("slow"));
    }

    #[test]
    fn negation_flips_and_dampens() {
        let plain = polarity("good");
        let negated = polarity("not good");
        assert!((negated - plain * NEGATION_FACTOR).abs() < 1e-9);
    }

    #[test]
    fn negation_reaches_past_intensifier() {
        assert!(polarity("not very good") < 0.0);
    }

    #[test]
    fn split_contraction_negates() {
        assert!(polarity("don t like it, not worth") < 0.0);
        assert!(polarity("i don t hate it") > 0.0);
    }

    #[test]
    fn lone_t_does_not_negate() {
        assert!(polarity("the T good") > 0.0);
        assert!(polarity("t great") > 0.0);
        assert!(polarity("can t complain, really good") > 0.0);
        assert!(polarity("isn t good") < 0.0);
    }

    #[test]
    fn lexicon_polarity_stays_in_range() {
        assert!(polarity("extremely excellent perfect best") <= 1.0);
        assert!(polarity("extremely terrible awful worst") >= -1.0);
    }

    #[test]
    fn empty_text_scores_neutral() {
        assert_eq!(sentiment_score(&Fixed(1.0), ""), NEUTRAL_SCORE);
    }

    #[test]
    fn polarity_is_rescaled_and_rounded() {
        assert_eq!(sentiment_score(&Fixed(1.0), "x"), 1.0);
        assert_eq!(sentiment_score(&Fixed(-1.0), "x"), 0.0);
        assert_eq!(sentiment_score(&Fixed(0.0), "x"), 0.5);
        assert_eq!(sentiment_score(&Fixed(0.123_456), "x"), 0.562);
    }

    #[test]
    fn estimator_failure_scores_neutral() {
        assert_eq!(sentiment_score(&Failing, "anything"), NEUTRAL_SCORE);
    }

    #[test]
    fn non_finite_or_out_of_range_scores_neutral() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1.5, -3.0] {
            assert_eq!(sentiment_score(&Fixed(bad), "x"), NEUTRAL_SCORE, "{bad}");
        }
    }

    #[test]
    fn score_always_within_unit_interval() {
        let texts = [
            "",
            "great",
            "terrible",
            "not not not bad",
            "very very very good",
            "12345 ... !!!",
            "crashes crashing broken buggy laggy slow",
        ];
        for text in texts {
            for estimator in [&LexiconPolarity as &dyn PolarityEstimator, &Failing, &Fixed(f64::NAN)] {
                let score = sentiment_score(estimator, text);
                assert!((0.0..=1.0).contains(&score), "{text:?} -> {score}");
            }
        }
    }
}
