use core::fmt;
use core::str::FromStr;

/// 着手時に合法手判定を行うかどうか。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum PlacementPolicy {
    /// 合法手判定を行わず、指定マスに必ず石を置いて手番を交代する。
    #[default]
    Permissive,
    /// 合法手以外への着手を `BoardError::IllegalMove` で拒否する。
    Strict,
}

/// 方針名の解析に失敗した。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown placement policy `{name}` (expected `strict` or `permissive`)")]
pub struct PolicyParseError {
    /// 入力された名前。
    name: String,
}

impl fmt::Display for PlacementPolicy {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
        };
        formatter.write_str(name)
    }
}

impl FromStr for PlacementPolicy {
    type Err = PolicyParseError;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            _ => Err(PolicyParseError {
                name: text.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PlacementPolicy;

    #[test]
    fn default_matches_unvalidated_placement() {
        assert_eq!(PlacementPolicy::default(), PlacementPolicy::Permissive);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Strict".parse::<PlacementPolicy>(), Ok(PlacementPolicy::Strict));
        assert_eq!(" permissive ".parse::<PlacementPolicy>(), Ok(PlacementPolicy::Permissive));
        assert_eq!(PlacementPolicy::Strict.to_string(), "strict");
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "lenient".parse::<PlacementPolicy>();
        assert!(err.is_err());
        let message = err.err().map(|value| value.to_string()).unwrap_or_default();
        assert!(message.contains("lenient"), "message={message}");
    }
}
