use crate::errors::ConfigError;

/// Upper bound (and fallback) for `number_of_reviewers`
pub const MAX_REVIEWERS: usize = 15;

/// One `team: quota` segment of `class_of_reviewers`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamQuota {
    pub team: String,
    pub quota: usize,
}

/// 评审人选择配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionConfig {
    /// 优先级最高：固定从该分组中抽取
    pub default_pool_key: Option<String>,
    /// 优先级次之：按团队配额抽取，保持输入顺序
    pub team_quotas: Option<Vec<TeamQuota>>,
    /// 已截断到 [0, 15]
    pub requested_count: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            default_pool_key: None,
            team_quotas: None,
            requested_count: MAX_REVIEWERS,
        }
    }
}

impl SelectionConfig {
    /// Builds the config from raw action inputs. Empty strings count as unset.
    ///
    /// `class_of_reviewers` is only parsed when no `default_label` is set, since the
    /// default pool wins and the class spec is never consulted.
    pub fn from_inputs(
        default_label: Option<&str>,
        class_of_reviewers: Option<&str>,
        number_of_reviewers: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let default_pool_key = default_label
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let team_quotas = match class_of_reviewers.map(str::trim) {
            Some(spec) if !spec.is_empty() && default_pool_key.is_none() => {
                Some(parse_team_quotas(spec)?)
            }
            _ => None,
        };

        Ok(Self {
            default_pool_key,
            team_quotas,
            requested_count: clamp_requested_count(number_of_reviewers),
        })
    }
}

/// Any value that is absent, non-numeric or outside [0, 15] becomes 15.
pub fn clamp_requested_count(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| (0..=MAX_REVIEWERS as i64).contains(n))
        .map_or(MAX_REVIEWERS, |n| n as usize)
}

/// Parses `"team A: 1, team B: 2"` into ordered `(team, quota)` pairs.
///
/// Blank segments (e.g. a trailing comma) are skipped. A team named twice keeps its
/// first position and takes the later quota.
pub fn parse_team_quotas(spec: &str) -> Result<Vec<TeamQuota>, ConfigError> {
    let mut quotas: Vec<TeamQuota> = Vec::new();

    for segment in spec.split(',') {
        if segment.trim().is_empty() {
            continue;
        }
        let malformed = |reason: &str| ConfigError::MalformedQuota {
            segment: segment.trim().to_string(),
            reason: reason.to_string(),
        };

        let (team, quota) = segment
            .split_once(':')
            .ok_or_else(|| malformed("expected 'team: count'"))?;
        let team = team.trim();
        if team.is_empty() {
            return Err(malformed("team name is empty"));
        }
        let quota: usize = quota
            .trim()
            .parse()
            .map_err(|_| malformed("count must be a non-negative integer"))?;

        match quotas.iter_mut().find(|q| q.team == team) {
            Some(existing) => existing.quota = quota,
            None => quotas.push(TeamQuota {
                team: team.to_string(),
                quota,
            }),
        }
    }

    Ok(quotas)
}
