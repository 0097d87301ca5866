use crate::db::types::TestType;

pub(crate) fn build_prompt(test_type: TestType, extracted_text: &str) -> String {
    match test_type {
        TestType::Quiz => build_quiz_prompt(extracted_text),
        TestType::Test => build_coding_prompt(extracted_text),
    }
}

/// Requests exactly 10 multiple-choice items as a bare JSON array.
pub(crate) fn build_quiz_prompt(extracted_text: &str) -> String {
    format!(
        r#"Using ONLY the text below, create 10 multiple-choice questions.

OUTPUT RULES:
- Output must be ONLY a valid JSON array.
- No markdown, no backticks, no explanation outside JSON.
- Do NOT add text before or after the JSON array.

QUESTION FORMAT (every item must follow this):
{{
  "title": "one line question",
  "options": [
    {{ "label": "A", "text": "" }},
    {{ "label": "B", "text": "" }},
    {{ "label": "C", "text": "" }},
    {{ "label": "D", "text": "" }}
  ],
  "answer": "A",
  "explanation": "short explanation"
}}

STRICT RULES:
- Generate exactly 10 questions.
- 4 options only (A,B,C,D).
- "answer" must match a label.
- No empty fields.
- No null values.

TEXT_START
{extracted_text}
TEXT_END"#
    )
}

/// Requests coding problems with fixed test-case counts; category is taken
/// from the "ODD System No." / "EVEN System No." section markers in the source.
pub(crate) fn build_coding_prompt(extracted_text: &str) -> String {
    format!(
        r#"Read the text and extract programming questions.

OUTPUT MUST BE ONLY A PURE JSON ARRAY.
NO markdown, NO backticks, NO extra text.

Each JSON object represents a question and MUST contain EXACTLY these fields:

{{
  "title": "",
  "description": "",
  "functionName": "solve",
  "sampleTestCase": {{
       "input": [],
       "expected": any
  }},
  "hiddenTestCases": [
       {{ "input": [], "expected": any }},
       ... exactly 10 total
  ],
  "examples": [
       {{ "input": [], "expected": any }},
       ... exactly 2 total
  ],
  "category": "odd" or "even"
}}

STRICT RULES:
- Every "input" must be an ARRAY of parameters in proper order.
  Example: solve(nums, target) -> "input": [["2","7","11"], 9]
- NEVER return empty objects.
- NEVER return null values.
- ALWAYS generate realistic and valid testcases matching the question.
- Detect category:
    Questions under "ODD System No." -> "category": "odd"
    Questions under "EVEN System No." -> "category": "even"

INPUT_TEXT_START
{extracted_text}
INPUT_TEXT_END"#
    )
}
