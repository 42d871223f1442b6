use shared_types::*;
use std::fs;
use std::path::PathBuf;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("gui/api-types"));
    fs::create_dir_all(&output_dir)?;

    let output_path = output_dir.join("types.ts");
    fs::write(&output_path, api_types()?)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

/// One file holding every type a qna API client sees.
fn api_types() -> Result<String, ts_rs::ExportError> {
    let types = [
        Question::export_to_string()?,
        QuestionWithAnswers::export_to_string()?,
        CreateQuestionRequest::export_to_string()?,
        Answer::export_to_string()?,
        CreateAnswerRequest::export_to_string()?,
        FieldError::export_to_string()?,
        ErrorResponse::export_to_string()?,
        HealthResponse::export_to_string()?,
    ];

    let mut output = types
        .into_iter()
        .map(clean_type)
        .collect::<Vec<_>>()
        .join("\n\n");
    output.push('\n');
    Ok(output)
}

// Everything lands in one file, so per-file imports and banners go
fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');
    type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type") && !trimmed.starts_with("// This file was generated")
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_type_strips_imports_and_banner() {
        let raw = "// This file was generated by [ts-rs]. Do not edit.\r\n\
                   import type { Answer } from \"./Answer\";\r\n\
                   \r\n\
                   export type Wrapper = { answers: Array<Answer>, };\r\n"
            .to_string();
        assert_eq!(
            clean_type(raw),
            "export type Wrapper = { answers: Array<Answer>, };"
        );
    }

    #[test]
    fn test_api_types_cover_every_wire_type() {
        let output = api_types().unwrap();
        for name in [
            "Question",
            "QuestionWithAnswers",
            "CreateQuestionRequest",
            "Answer",
            "CreateAnswerRequest",
            "FieldError",
            "ErrorResponse",
            "HealthResponse",
        ] {
            assert!(output.contains(&format!("export type {name} ")), "{name} missing");
        }
        assert!(output.contains("id: number"));
        assert!(output.contains("question_id: number"));
        assert!(!output.contains("bigint"));
        assert!(output.contains("created_at: string"));
        assert!(output.contains("user_id: string"));
        assert!(!output.contains("import type"));
        assert!(output.ends_with('\n'));
    }
}
