//! Review prompt for the query-checker tool

/// Template embedding the candidate command and the common-mistake checklist
///
/// The model is asked to either reproduce the command unchanged or return a
/// corrected rewrite; the tool passes its output through verbatim.
pub const QUERY_CHECKER_TEMPLATE: &str = r#"
{command}
Double check the MongoDB command above for common mistakes, including:
- Using $in or $nin with NULL values
- Using the proper operator for array elements
- Using the correct syntax for range queries
- Data type mismatch in predicates
- Properly specifying field paths
- Using the correct number of arguments for operators
- Casting to the correct data type when necessary
- Using the proper fields for joins in $lookup operations

If there are any of the above mistakes, rewrite the command. If there are no mistakes, just reproduce the original command."#;

/// Render the review prompt for a candidate command
pub fn render_query_checker_prompt(command: &str) -> String {
    QUERY_CHECKER_TEMPLATE.replace("{command}", command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_command() {
        let prompt = render_query_checker_prompt(r#"{"find": "users"}"#);

        assert!(prompt.contains(r#"{"find": "users"}"#));
        assert!(prompt.contains("Double check the MongoDB command above"));
        assert!(prompt.contains("$lookup"));
        // The placeholder must be gone
        assert!(!prompt.contains("{command}"));
    }
}
