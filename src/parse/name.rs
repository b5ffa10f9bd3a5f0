use std::fmt::{self, Display};

use miette::SourceSpan;
use winnow::{
    Parser,
    combinator::eof,
    error::{ContextError, ParseError},
};

use super::DefinitionName;

/// The group of definitions that don't name one explicitly.
pub const CORE_GROUP: &str = "core";

/// Splits a definition name, like `io.k8s.api.apps.v1beta1.Deployment`,
/// into its group, version, and kind.
///
/// The last segment is the kind. If the segment before it is a version
/// string (`v1`, `v1beta2`, `v2alpha1`), that's the version, and
/// the segment before the version is the group. The legacy `api`
/// package (`io.k8s.kubernetes.pkg.api.v1.Pod`) has no group.
/// Names without a version string parse successfully, but have
/// no version.
pub fn parse(name: &DefinitionName) -> Result<ParsedDefinitionName<'_>, BadDefinitionName> {
    (self::parser::segments, eof)
        .map(|(segments, _)| ParsedDefinitionName::from_segments(&segments))
        .parse(name.as_str())
        .map_err(BadDefinitionName::from_parse_error)
}

/// Returns `true` if `segment` is a Kubernetes API version string.
pub fn is_version(segment: &str) -> bool {
    (self::parser::version, eof).parse(segment).is_ok()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParsedDefinitionName<'a> {
    pub group: Option<&'a str>,
    pub version: Option<&'a str>,
    pub kind: &'a str,
}

impl<'a> ParsedDefinitionName<'a> {
    fn from_segments(segments: &[&'a str]) -> Self {
        let &[ref rest @ .., candidate, kind] = segments else {
            unreachable!("parser yields at least two segments");
        };
        if !is_version(candidate) {
            return Self {
                group: None,
                version: None,
                kind,
            };
        }
        let group = match rest.last() {
            Some(&"api") | None => None,
            Some(&group) => Some(group),
        };
        Self {
            group,
            version: Some(candidate),
            kind,
        }
    }

    /// Returns the group name, or [`CORE_GROUP`] if the definition
    /// doesn't have one.
    pub fn group_or_core(&self) -> &'a str {
        self.group.unwrap_or(CORE_GROUP)
    }
}

impl Display for ParsedDefinitionName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/", self.group_or_core())?;
        if let Some(version) = self.version {
            write!(f, "{version}.")?;
        }
        f.write_str(self.kind)
    }
}

mod parser {
    use winnow::{
        Parser,
        ascii::digit1,
        combinator::{alt, opt, separated},
        token::take_while,
    };

    pub fn segments<'a>(input: &mut &'a str) -> winnow::Result<Vec<&'a str>> {
        separated(2.., take_while(1.., |c: char| c != '.'), '.').parse_next(input)
    }

    pub fn version(input: &mut &str) -> winnow::Result<()> {
        ('v', digit1, opt((alt(("alpha", "beta")), digit1)))
            .void()
            .parse_next(input)
    }
}

#[derive(Debug, miette::Diagnostic, thiserror::Error)]
#[error("invalid definition name `{code}`")]
pub struct BadDefinitionName {
    #[source_code]
    code: String,
    #[label]
    span: SourceSpan,
}

impl BadDefinitionName {
    fn from_parse_error(error: ParseError<&str, ContextError>) -> Self {
        let input = *error.input();
        Self {
            code: input.to_owned(),
            span: error.char_span().into(),
        }
    }
}
