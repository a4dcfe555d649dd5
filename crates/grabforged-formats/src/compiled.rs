//! Compiled custom formats.
//!
//! Raw [`CustomFormat`] records hold regex patterns as strings; this
//! module compiles them once so evaluation against each candidate is a
//! pure lookup. Compilation never fails: a bad pattern becomes a
//! condition that always evaluates false, logged once here rather than
//! on every candidate.

use grabforged_core::{Condition, ConditionKind, CustomFormat, FormatId};
use grabforged_parser::ParsedRelease;
use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::size::SizeRange;

/// How a compiled condition tests its input.
#[derive(Debug, Clone)]
enum Matcher {
    Pattern(Regex),
    Size(SizeRange),
    /// Placeholder for a pattern that failed to compile.
    Never,
}

/// One compiled condition.
#[derive(Debug, Clone)]
struct CompiledCondition {
    kind: ConditionKind,
    matcher: Matcher,
    negate: bool,
    required: bool,
}

/// One compiled format.
#[derive(Debug, Clone)]
pub struct CompiledFormat {
    /// Identifier of the source [`CustomFormat`].
    pub id: FormatId,
    /// Name of the source format, kept for log output.
    pub name: String,
    conditions: Vec<CompiledCondition>,
}

/// A format that matched a release, with the indices of the conditions
/// that evaluated true (after negation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatMatch {
    /// The matched format.
    pub format_id: FormatId,
    /// Indices into the format's condition list.
    pub matched_conditions: Vec<usize>,
}

/// All custom formats compiled for evaluation.
#[derive(Debug, Clone, Default)]
pub struct CompiledFormatSet {
    formats: Vec<CompiledFormat>,
}

impl CompiledFormatSet {
    /// Compile a configuration snapshot's formats.
    ///
    /// Formats with zero conditions are mis-configured and excluded
    /// entirely; they would otherwise never match but still show up in
    /// evaluation output.
    pub fn compile(formats: &[CustomFormat]) -> Self {
        let mut compiled = Vec::with_capacity(formats.len());
        for format in formats {
            if format.conditions.is_empty() {
                warn!(format = %format.name, "custom format has no conditions, excluding");
                continue;
            }
            let conditions = format
                .conditions
                .iter()
                .map(|c| compile_condition(c, &format.name))
                .collect();
            compiled.push(CompiledFormat {
                id: format.id,
                name: format.name.clone(),
                conditions,
            });
        }
        Self { formats: compiled }
    }

    /// Number of formats that survived compilation.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Whether no formats survived compilation.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Evaluate every format against a parsed release.
    ///
    /// A format matches iff all its `required` conditions hold and, when
    /// non-required conditions exist, at least one of them holds.
    pub fn matches(
        &self,
        release: &ParsedRelease,
        raw_title: &str,
        size_mb: i64,
        indexer_flags: &[String],
    ) -> Vec<FormatMatch> {
        let mut matches = Vec::new();
        for format in &self.formats {
            let mut matched_conditions = Vec::new();
            let mut required_ok = true;
            let mut has_optional = false;
            let mut optional_ok = false;

            for (i, condition) in format.conditions.iter().enumerate() {
                let raw = evaluate(condition, release, raw_title, size_mb, indexer_flags);
                let value = raw ^ condition.negate;
                if value {
                    matched_conditions.push(i);
                }
                if condition.required {
                    required_ok &= value;
                } else {
                    has_optional = true;
                    optional_ok |= value;
                }
            }

            if required_ok && (!has_optional || optional_ok) {
                matches.push(FormatMatch {
                    format_id: format.id,
                    matched_conditions,
                });
            }
        }
        matches
    }
}

fn compile_condition(condition: &Condition, format_name: &str) -> CompiledCondition {
    let matcher = match condition.kind {
        ConditionKind::Size => match SizeRange::parse(&condition.pattern) {
            Some(range) => Matcher::Size(range),
            None => {
                warn!(
                    format = %format_name,
                    pattern = %condition.pattern,
                    "invalid size range, condition will never match"
                );
                Matcher::Never
            }
        },
        _ => match RegexBuilder::new(&condition.pattern)
            .case_insensitive(true)
            .build()
        {
            Ok(regex) => Matcher::Pattern(regex),
            Err(error) => {
                warn!(
                    format = %format_name,
                    pattern = %condition.pattern,
                    %error,
                    "invalid regex, condition will never match"
                );
                Matcher::Never
            }
        },
    };
    CompiledCondition {
        kind: condition.kind,
        matcher,
        negate: condition.negate,
        required: condition.required,
    }
}

fn evaluate(
    condition: &CompiledCondition,
    release: &ParsedRelease,
    raw_title: &str,
    size_mb: i64,
    indexer_flags: &[String],
) -> bool {
    let regex = match &condition.matcher {
        Matcher::Pattern(regex) => regex,
        Matcher::Size(range) => return range.contains(size_mb),
        Matcher::Never => return false,
    };

    match condition.kind {
        ConditionKind::ReleaseName => regex.is_match(raw_title),
        ConditionKind::ReleaseGroup => release
            .release_group
            .as_deref()
            .is_some_and(|group| regex.is_match(group)),
        ConditionKind::Source => regex.is_match(&release.quality.source.to_string()),
        ConditionKind::Resolution => regex.is_match(&release.quality.resolution.to_string()),
        ConditionKind::Codec => release
            .quality
            .codec
            .is_some_and(|codec| regex.is_match(&codec.to_string())),
        ConditionKind::AudioCodec => release
            .audio
            .codec
            .is_some_and(|codec| regex.is_match(&codec.to_string())),
        ConditionKind::AudioChannels => release
            .audio
            .channels
            .as_deref()
            .is_some_and(|channels| regex.is_match(channels)),
        ConditionKind::Language => release.languages.iter().any(|code| regex.is_match(code)),
        ConditionKind::Edition => release
            .special
            .is_some_and(|special| regex.is_match(&special.to_string())),
        ConditionKind::IndexerFlag => indexer_flags.iter().any(|flag| regex.is_match(flag)),
        // Handled above via the matcher.
        ConditionKind::Size => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grabforged_parser::parse;

    fn format(id: i64, conditions: Vec<Condition>) -> CustomFormat {
        CustomFormat {
            id: FormatId::from(id),
            name: format!("format-{id}"),
            include_when_renaming: false,
            conditions,
        }
    }

    fn condition(kind: ConditionKind, pattern: &str) -> Condition {
        Condition {
            kind,
            pattern: pattern.to_string(),
            negate: false,
            required: false,
        }
    }

    #[test]
    fn optional_condition_matches() {
        let formats = vec![format(
            1,
            vec![condition(ConditionKind::Resolution, "1080p")],
        )];
        let set = CompiledFormatSet::compile(&formats);
        let release = parse("Movie.2020.1080p.BluRay.x264-GRP");

        let matches = set.matches(&release, &release.release_title, 4000, &[]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].format_id, FormatId::from(1));
        assert_eq!(matches[0].matched_conditions, vec![0]);
    }

    #[test]
    fn required_condition_gates_the_format() {
        let mut required = condition(ConditionKind::Source, "WEB-DL");
        required.required = true;
        let formats = vec![format(
            1,
            vec![required, condition(ConditionKind::Resolution, "1080p")],
        )];
        let set = CompiledFormatSet::compile(&formats);

        let bluray = parse("Movie.2020.1080p.BluRay.x264-GRP");
        assert!(set.matches(&bluray, &bluray.release_title, 0, &[]).is_empty());

        let web = parse("Movie.2020.1080p.WEB-DL.x264-GRP");
        assert_eq!(set.matches(&web, &web.release_title, 0, &[]).len(), 1);
    }

    #[test]
    fn required_alone_is_enough() {
        let mut required = condition(ConditionKind::ReleaseName, "remux");
        required.required = true;
        let formats = vec![format(1, vec![required])];
        let set = CompiledFormatSet::compile(&formats);

        let release = parse("Movie.2020.1080p.BluRay.REMUX.AVC-GRP");
        assert_eq!(set.matches(&release, &release.release_title, 0, &[]).len(), 1);
    }

    #[test]
    fn negate_inverts_the_result() {
        let mut negated = condition(ConditionKind::ReleaseGroup, "BadGroup");
        negated.negate = true;
        negated.required = true;
        let formats = vec![format(1, vec![negated])];
        let set = CompiledFormatSet::compile(&formats);

        let bad = parse("Movie.2020.1080p.BluRay.x264-BadGroup");
        assert!(set.matches(&bad, &bad.release_title, 0, &[]).is_empty());

        let good = parse("Movie.2020.1080p.BluRay.x264-GoodGroup");
        assert_eq!(set.matches(&good, &good.release_title, 0, &[]).len(), 1);
    }

    #[test]
    fn zero_condition_format_is_excluded() {
        let formats = vec![format(1, vec![])];
        let set = CompiledFormatSet::compile(&formats);
        assert!(set.is_empty());
    }

    #[test]
    fn invalid_regex_never_matches_but_does_not_fail() {
        let formats = vec![format(
            1,
            vec![condition(ConditionKind::ReleaseName, "([unclosed")],
        )];
        let set = CompiledFormatSet::compile(&formats);
        assert_eq!(set.len(), 1);

        let release = parse("Movie.2020.1080p.BluRay.x264-GRP");
        assert!(set.matches(&release, &release.release_title, 0, &[]).is_empty());
    }

    #[test]
    fn size_condition_uses_candidate_size() {
        let formats = vec![format(1, vec![condition(ConditionKind::Size, ">500")])];
        let set = CompiledFormatSet::compile(&formats);
        let release = parse("Movie.2020.1080p.BluRay.x264-GRP");

        assert!(set.matches(&release, &release.release_title, 400, &[]).is_empty());
        assert_eq!(set.matches(&release, &release.release_title, 600, &[]).len(), 1);
    }

    #[test]
    fn language_condition_checks_codes() {
        let formats = vec![format(1, vec![condition(ConditionKind::Language, "^fr$")])];
        let set = CompiledFormatSet::compile(&formats);

        let french = parse("Movie.2020.FRENCH.1080p.BluRay.x264-GRP");
        assert_eq!(set.matches(&french, &french.release_title, 0, &[]).len(), 1);

        let plain = parse("Movie.2020.1080p.BluRay.x264-GRP");
        assert!(set.matches(&plain, &plain.release_title, 0, &[]).is_empty());
    }

    #[test]
    fn indexer_flag_condition() {
        let formats = vec![format(
            1,
            vec![condition(ConditionKind::IndexerFlag, "freeleech")],
        )];
        let set = CompiledFormatSet::compile(&formats);
        let release = parse("Movie.2020.1080p.BluRay.x264-GRP");

        let flags = vec!["Freeleech".to_string()];
        assert_eq!(set.matches(&release, &release.release_title, 0, &flags).len(), 1);
        assert!(set.matches(&release, &release.release_title, 0, &[]).is_empty());
    }
}
