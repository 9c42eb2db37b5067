pub(super) const ITEM_NAME: &str = "Beginner-Friendly Context";

const GENERAL_GUIDANCE: &str = "\
When responding to the user:

- Assume the user is a complete beginner in programming and technology.
- Provide very simple, easy-to-understand explanations.
- Avoid using technical jargon. If you must use a technical term, explain it in simple words.
- Use everyday analogies to explain complex concepts when possible.
- Break down explanations into small, digestible parts.
- Encourage the user to ask follow-up questions if anything is unclear.
- If relevant, suggest one or two beginner-friendly resources for further learning.
- Do not reference specific files or project structures unless explicitly asked about them.

Remember, the goal is to make concepts as accessible as possible to someone with no prior knowledge in the field.";

pub(super) fn general_guidance() -> &'static str {
    GENERAL_GUIDANCE
}

/// Text after the last `.` of a file name.
///
/// A name without a dot is returned whole, so `Makefile` yields `Makefile`.
pub(super) fn file_extension(file_name: &str) -> &str {
    file_name.rsplit('.').next().unwrap_or_default()
}

pub(super) fn project_guidance(
    file_name: &str,
    extension: &str,
    content: &str,
    structure: &str,
) -> String {
    format!(
        "
When responding to this query:
- Assume the user is a beginner who is new to the current project, technologies, programming language, and possibly coding altogether
- The current file is: {file_name}
- Use latest frameworks and technologies when possible, especially those relevant to {extension} files
- Be specific about instructions you give since the user might not know common assumptions
- Explain technical terms and concepts when they're first introduced
- Provide step-by-step guidance when explaining processes or solutions
- Use simple language and avoid jargon where possible
- Offer examples to illustrate complex ideas, preferably related to {extension} files
- Consider the project structure when giving advice. Here's a simplified view of the project structure:

{structure}

- Encourage the user to ask follow-up questions if anything is unclear
- If relevant, suggest resources for further learning about concepts related to {extension} files

Current file content:
```{extension}
{content}
```
"
    )
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("main.rs", "rs")]
    #[case("archive.tar.gz", "gz")]
    #[case("Makefile", "Makefile")]
    #[case(".gitignore", "gitignore")]
    #[case("trailing.", "")]
    #[case("", "")]
    fn test_file_extension(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(file_extension(name), expected);
    }

    #[test]
    fn test_project_guidance_interpolates_facts() {
        let text = project_guidance("app.ts", "ts", "let x = 1;", "README.md\nsrc/\n  app.ts\n");

        assert!(text.starts_with("When responding to this query:"));
        assert!(text.contains("- The current file is: app.ts\n"));
        assert!(text.contains("especially those relevant to ts files"));
        assert!(text.contains("project structure:\n\nREADME.md\nsrc/\n  app.ts\n\n\n- Encourage"));
        assert!(text.ends_with("```ts\nlet x = 1;\n```"));
    }

    #[test]
    fn test_general_guidance_is_trimmed() {
        let text = general_guidance();

        assert!(text.starts_with("When responding to the user:"));
        assert!(text.ends_with("no prior knowledge in the field."));
    }
}
