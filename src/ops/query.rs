use serde::Serialize;

/// Calendar month folder names used by the case tree
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Collapse runs of whitespace to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a month name ("march", " MAR ") to its folder form ("Mar").
pub fn normalize_month(s: &str) -> Option<&'static str> {
    let s = normalize_ws(s);
    let prefix: String = s.chars().take(3).collect();
    if s.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .copied()
        .find(|m| m.eq_ignore_ascii_case(&prefix))
        .filter(|m| {
            // accept "Mar" and "March", not "Marx"
            s.len() == 3 || full_month_name(m).eq_ignore_ascii_case(&s)
        })
}

fn full_month_name(abbrev: &str) -> &'static str {
    match abbrev {
        "Jan" => "January",
        "Feb" => "February",
        "Mar" => "March",
        "Apr" => "April",
        "May" => "May",
        "Jun" => "June",
        "Jul" => "July",
        "Aug" => "August",
        "Sep" => "September",
        "Oct" => "October",
        "Nov" => "November",
        _ => "December",
    }
}

/// Filters for the case search surface. The year comes from the picker.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
}

fn non_empty(s: &str) -> Option<String> {
    let s = normalize_ws(s);
    (!s.is_empty()).then_some(s)
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, q: &str) -> Self {
        self.q = non_empty(q);
        self
    }

    pub fn year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    /// Unknown month names are dropped.
    pub fn month(mut self, month: &str) -> Self {
        self.month = normalize_month(month);
        self
    }

    pub fn party(mut self, party: &str) -> Self {
        self.party = non_empty(party);
        self
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = non_empty(domain);
        self
    }

    pub fn subcategory(mut self, subcategory: &str) -> Self {
        self.subcategory = non_empty(subcategory);
        self
    }

    /// Encode as `application/x-www-form-urlencoded`, using `year_key` for
    /// the picker's value.
    pub fn to_query_string_with(&self, year_key: &str) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        if let Some(q) = &self.q {
            ser.append_pair("q", q);
        }
        if let Some(year) = self.year {
            ser.append_pair(year_key, &year.to_string());
        }
        if let Some(month) = self.month {
            ser.append_pair("month", month);
        }
        if let Some(party) = &self.party {
            ser.append_pair("party", party);
        }
        if let Some(domain) = &self.domain {
            ser.append_pair("domain", domain);
        }
        if let Some(sub) = &self.subcategory {
            ser.append_pair("subcategory", sub);
        }
        ser.finish()
    }

    pub fn to_query_string(&self) -> String {
        self.to_query_string_with("year")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn year_only() {
        assert_eq!(SearchQuery::new().year(2025).to_query_string(), "year=2025");
    }

    #[test]
    fn empty_query_is_empty_string() {
        assert_eq!(SearchQuery::new().text("   ").to_query_string(), "");
    }

    #[test]
    fn fields_in_fixed_order_and_encoded() {
        let q = SearchQuery::new()
            .subcategory("Orders/Judgments")
            .party("  Sharma   v.  State ")
            .month("march")
            .year(2024)
            .text("bail");
        assert_eq!(
            q.to_query_string(),
            "q=bail&year=2024&month=Mar&party=Sharma+v.+State&subcategory=Orders%2FJudgments"
        );
    }

    #[test]
    fn custom_year_key() {
        let q = SearchQuery::new().year(1999);
        assert_eq!(q.to_query_string_with("decision_year"), "decision_year=1999");
    }

    #[test]
    fn month_normalization() {
        assert_eq!(normalize_month("jan"), Some("Jan"));
        assert_eq!(normalize_month(" SEPTEMBER "), Some("Sep"));
        assert_eq!(normalize_month("May"), Some("May"));
        assert_eq!(normalize_month("Marx"), None);
        assert_eq!(normalize_month("Ja"), None);
        assert_eq!(normalize_month("13"), None);
    }

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  a \t b\n c  "), "a b c");
    }
}
