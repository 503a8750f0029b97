use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("invalid url template {0:?}")]
    InvalidTemplate(String),
    #[error("missing value for url parameter <{0}>")]
    MissingParameter(String),
    #[error("empty value for url parameter <{0}>")]
    EmptyParameter(String),
}

/// Fill every `<name>` placeholder in `template` with the matching value
/// from `params`.
///
/// Values are percent-encoded, so a value can never introduce a new path
/// segment or query string.
///
/// ```
/// use std::collections::HashMap;
///
/// let params = HashMap::from([("opportunityType", "skill")]);
/// let url = contribution_opportunities::util::interpolate_url(
///     "/opportunitiessummaryhandler/<opportunityType>",
///     &params,
/// )
/// .unwrap();
/// assert_eq!(url, "/opportunitiessummaryhandler/skill");
/// ```
pub fn interpolate_url(template: &str, params: &HashMap<&str, &str>) -> Result<String, UrlError> {
    if !template.starts_with('/') {
        return Err(UrlError::InvalidTemplate(template.to_string()));
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);

        let after = &rest[open + 1..];
        let close = after
            .find('>')
            .ok_or_else(|| UrlError::InvalidTemplate(template.to_string()))?;
        let name = &after[..close];

        if name.is_empty() || name.contains('<') {
            return Err(UrlError::InvalidTemplate(template.to_string()));
        }

        let value = params
            .get(name)
            .ok_or_else(|| UrlError::MissingParameter(name.to_string()))?;
        if value.is_empty() {
            return Err(UrlError::EmptyParameter(name.to_string()));
        }

        out.push_str(&urlencoding::encode(value));
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}
