//! Drawer configuration.
//!
//! Offsets are distances from the resting (bottom) edge of the viewport.
//! They are turned into absolute axis coordinates by the geometry provider.

use std::time::Duration;

use crate::animation::Easing;
use crate::error::ConfigWarning;

/// Default slide duration, shared by the visual transition and the
/// completion timer.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(400);

/// How the drawer learns that a slide has visually finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionCompletion {
    /// Fire did-open / did-close after `animation_duration` has elapsed.
    #[default]
    Timer,
    /// Fire them when the host reports the transition ended.
    HostSignal,
}

/// Per-drawer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerConfig {
    /// Offset of the preview (most closed resting) position. `None` or zero
    /// means the drawer closes fully off-surface.
    pub preview_offset: Option<f32>,
    /// Intermediate snap offsets, in snap order.
    pub snap_offsets: Vec<f32>,
    /// Offset of the fully open position. `None` opens up to the top padding.
    pub max_offset: Option<f32>,
    /// Whether the drawer may slide fully off-surface.
    pub can_close: bool,
    /// Duration of animated slides.
    pub animation_duration: Duration,
    /// Easing curve of animated slides.
    pub easing: Easing,
    /// Completion detection for will/did notifications.
    pub completion: TransitionCompletion,
    /// Tokens dropped while parsing the snap offset string.
    rejected_tokens: Vec<String>,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            preview_offset: None,
            snap_offsets: Vec::new(),
            max_offset: None,
            can_close: true,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            easing: Easing::DRAWER,
            completion: TransitionCompletion::Timer,
            rejected_tokens: Vec::new(),
        }
    }
}

impl DrawerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preview_offset(mut self, offset: f32) -> Self {
        self.preview_offset = Some(offset);
        self
    }

    pub fn with_snap_offsets(mut self, offsets: impl IntoIterator<Item = f32>) -> Self {
        self.snap_offsets = offsets.into_iter().collect();
        self.rejected_tokens.clear();
        self
    }

    /// Set snap offsets from their delimited string form, e.g. `"120, 300 450"`.
    ///
    /// Tokens that do not parse as numbers are dropped.
    pub fn with_snap_offsets_str(mut self, raw: &str) -> Self {
        let (offsets, rejected) = parse_snap_offsets(raw);
        self.snap_offsets = offsets;
        self.rejected_tokens = rejected;
        self
    }

    pub fn with_max_offset(mut self, offset: f32) -> Self {
        self.max_offset = Some(offset);
        self
    }

    pub fn with_can_close(mut self, can_close: bool) -> Self {
        self.can_close = can_close;
        self
    }

    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_completion(mut self, completion: TransitionCompletion) -> Self {
        self.completion = completion;
        self
    }

    /// Preview offset if it is set to something other than zero.
    pub fn effective_preview_offset(&self) -> Option<f32> {
        self.preview_offset.filter(|v| is_set(*v))
    }

    /// Max offset if it is set to something other than zero.
    pub fn effective_max_offset(&self) -> Option<f32> {
        self.max_offset.filter(|v| is_set(*v))
    }

    /// Correct inconsistent settings, returning what was changed.
    pub fn validated(mut self) -> (Self, Vec<ConfigWarning>) {
        let mut warnings = Vec::new();

        for token in self.rejected_tokens.drain(..) {
            tracing::warn!("dropping malformed snap offset {:?}", token);
            warnings.push(ConfigWarning::MalformedSnapOffset { token });
        }

        if !self.can_close && self.effective_preview_offset().is_none() {
            tracing::warn!("{}", ConfigWarning::CanCloseWithoutPreview);
            self.can_close = true;
            warnings.push(ConfigWarning::CanCloseWithoutPreview);
        }

        (self, warnings)
    }
}

fn is_set(v: f32) -> bool {
    v != 0.0 && !v.is_nan()
}

/// Split a snap offset string on whitespace and commas and read the leading
/// integer of each token.
///
/// A token is an optional sign followed by at least one digit; anything after
/// the digits is ignored, so `"300px"` reads as 300 and `"12.7"` as 12.
/// Tokens without leading digits are rejected.
///
/// Returns the parsed offsets in input order and the rejected tokens.
pub fn parse_snap_offsets(raw: &str) -> (Vec<f32>, Vec<String>) {
    let mut offsets = Vec::new();
    let mut rejected = Vec::new();

    for token in raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        match leading_integer(token) {
            Some(v) => offsets.push(v),
            None => rejected.push(token.to_string()),
        }
    }

    (offsets, rejected)
}

fn leading_integer(token: &str) -> Option<f32> {
    let (negative, unsigned) = match token.as_bytes().first()? {
        b'-' => (true, &token[1..]),
        b'+' => (false, &token[1..]),
        _ => (false, token),
    };

    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let value = unsigned[..digits].parse::<f64>().ok()? as f32;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snap_offsets_mixed_delimiters() {
        let (offsets, rejected) = parse_snap_offsets("100, 250 ,400\t520");
        assert_eq!(offsets, vec![100.0, 250.0, 400.0, 520.0]);
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_parse_snap_offsets_drops_malformed() {
        let (offsets, rejected) = parse_snap_offsets("100 abc .5 - +");
        assert_eq!(offsets, vec![100.0]);
        assert_eq!(rejected, vec!["abc", ".5", "-", "+"]);
    }

    #[test]
    fn test_parse_snap_offsets_reads_leading_integer() {
        let (offsets, rejected) = parse_snap_offsets("300px 12.7 -40 +8 1e3");
        assert_eq!(offsets, vec![300.0, 12.0, -40.0, 8.0, 1.0]);
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_parse_empty_string() {
        let (offsets, rejected) = parse_snap_offsets("");
        assert!(offsets.is_empty());
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_can_close_forced_without_preview() {
        let (config, warnings) = DrawerConfig::new()
            .with_preview_offset(0.0)
            .with_can_close(false)
            .validated();
        assert!(config.can_close);
        assert_eq!(warnings, vec![ConfigWarning::CanCloseWithoutPreview]);
    }

    #[test]
    fn test_can_close_kept_with_preview() {
        let (config, warnings) = DrawerConfig::new()
            .with_preview_offset(120.0)
            .with_can_close(false)
            .validated();
        assert!(!config.can_close);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_malformed_tokens_reported_once() {
        let (config, warnings) = DrawerConfig::new().with_snap_offsets_str("10 x").validated();
        assert_eq!(config.snap_offsets, vec![10.0]);
        assert_eq!(
            warnings,
            vec![ConfigWarning::MalformedSnapOffset {
                token: "x".to_string()
            }]
        );

        let (_, again) = config.validated();
        assert!(again.is_empty());
    }

    #[test]
    fn test_zero_offsets_are_unset() {
        let config = DrawerConfig::new().with_preview_offset(0.0).with_max_offset(0.0);
        assert_eq!(config.effective_preview_offset(), None);
        assert_eq!(config.effective_max_offset(), None);
    }
}
