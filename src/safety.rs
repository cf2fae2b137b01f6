/// Medicine names and procedure terms the pre-filter refuses outright.
/// Substring match, so "overdose" and "drugstore" are blocked too; false
/// positives are preferred over a missed term.
pub const DEFAULT_BLOCKED_KEYWORDS: &[&str] = &[
    "paracetamol",
    "ibuprofen",
    "acetaminophen",
    "aspirin",
    "prescription",
    "dose",
    "inject",
    "surgery",
    "diagnose",
    "medication",
    "drug",
    "treatment plan",
    "tablet",
    "capsule",
];

#[derive(Debug, Clone)]
pub struct SafetyPolicy {
    blocked_keywords: Vec<String>,
}

impl Default for SafetyPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCKED_KEYWORDS.iter().map(|term| (*term).to_owned()))
    }
}

impl SafetyPolicy {
    pub fn new(keywords: impl IntoIterator<Item = String>) -> Self {
        Self {
            blocked_keywords: keywords
                .into_iter()
                .map(|keyword| keyword.to_lowercase())
                .collect(),
        }
    }

    pub fn validate_query(&self, input: &str) -> Vec<String> {
        let lowercase = input.to_lowercase();
        self.blocked_keywords
            .iter()
            .filter(|keyword| lowercase.contains(keyword.as_str()))
            .map(|keyword| format!("blocked-keyword:{keyword}"))
            .collect()
    }

    pub fn is_safe(&self, input: &str) -> bool {
        self.validate_query(input).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SafetyPolicy;

    #[test]
    fn blocks_keyword_anywhere_in_query() {
        let policy = SafetyPolicy::default();
        assert!(!policy.is_safe("What dose of ibuprofen should I take?"));
        assert!(!policy.is_safe("is surgery my only option"));
    }

    #[test]
    fn match_is_case_insensitive() {
        let policy = SafetyPolicy::default();
        assert!(!policy.is_safe("Can I take ASPIRIN with coffee?"));
        assert!(!policy.is_safe("PrEsCrIpTiOn refill"));
    }

    #[test]
    fn matches_inside_longer_words() {
        let policy = SafetyPolicy::default();
        // "dose" inside "overdosed"
        assert!(!policy.is_safe("my friend overdosed on candy"));
    }

    #[test]
    fn allows_queries_without_keywords() {
        let policy = SafetyPolicy::default();
        assert!(policy.is_safe("I have a headache, what should I do?"));
        assert!(policy.is_safe("how much water should I drink daily"));
    }

    #[test]
    fn empty_query_is_safe() {
        assert!(SafetyPolicy::default().is_safe(""));
    }

    #[test]
    fn reports_one_flag_per_matched_keyword() {
        let policy = SafetyPolicy::default();
        let flags = policy.validate_query("What dose of ibuprofen should I take?");
        assert_eq!(flags.len(), 2);
        assert!(flags.contains(&"blocked-keyword:dose".to_owned()));
        assert!(flags.contains(&"blocked-keyword:ibuprofen".to_owned()));
    }

    #[test]
    fn custom_keyword_set_replaces_default() {
        let policy = SafetyPolicy::new(vec!["Antibiotic".to_owned()]);
        assert!(!policy.is_safe("do antibiotics help with a cold"));
        assert!(policy.is_safe("what dose should I take"));
    }
}
