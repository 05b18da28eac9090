use schemars::JsonSchema;

use crate::models::domain::{
    AudioContent, AudioLength, CodeContent, DepthLevel, TextContent, VisualContent,
};

const JSON_OUTPUT_RULES: &str = "## OUTPUT FORMAT

Return ONLY a single JSON object that validates against the JSON Schema below. No prose before or after it, no markdown code fences, no extra keys.

JSON safety rules:
1. Never put literal line breaks inside string values; write \\n instead.
2. Escape every backslash (write \\\\theta, not \\theta, for LaTeX).
3. Use standard double quotes (\") for all keys and strings.";

fn schema_for<T: JsonSchema>() -> String {
    serde_json::to_string_pretty(&schemars::schema_for!(T)).unwrap_or_default()
}

fn output_section<T: JsonSchema>() -> String {
    format!("{}\n\n### JSON Schema\n{}", JSON_OUTPUT_RULES, schema_for::<T>())
}

pub fn text_explanation_prompt(topic: &str, depth: DepthLevel) -> String {
    let depth_instructions = match depth {
        DepthLevel::Brief => "Write a concise explanation of about 300-500 words covering the definition, the core intuition and two or three typical use cases.",
        DepthLevel::Moderate => "Write a moderately detailed explanation of about 800-1200 words covering the definition, the mathematical intuition where it applies, how it works step by step, strengths and limitations, and practical use cases.",
        DepthLevel::Comprehensive => "Write an in-depth explanation of about 1500-2500 words covering the formal definition, mathematical foundations and formulas, the algorithm step by step, implementation concerns, comparison with related approaches, real-world applications, strengths and limitations, and a thorough summary.",
    };

    format!(
        "You are an expert machine learning educator. Produce a structured explanation of \"{topic}\" for ML learners.

{depth_instructions}

Organize the content into sections that build from basics to advanced material. Use analogies where they help and LaTeX-style markdown for notation.

{output}",
        topic = topic,
        depth_instructions = depth_instructions,
        output = output_section::<TextContent>(),
    )
}

pub fn code_generation_prompt(topic: &str, complexity: DepthLevel) -> String {
    let complexity_instructions = match complexity {
        DepthLevel::Brief => "Write a minimal example (50-100 lines) that demonstrates the core concept.",
        DepthLevel::Moderate => "Write a moderately detailed example (100-200 lines) with data handling, training, evaluation metrics and a visualization.",
        DepthLevel::Comprehensive => "Write a production-quality example (200-400 lines) with preprocessing, model implementation, hyperparameter tuning, cross-validation, visualization and analysis of the results.",
    };

    format!(
        "You are an expert ML engineer and educator. Write a complete, runnable Python program about \"{topic}\".

{complexity_instructions}

The program must generate its own sample data, print its results, and carry inline comments. Prefer widely used libraries (numpy, pandas, scikit-learn, matplotlib, PyTorch or TensorFlow). List every third-party package in the dependencies array.

{output}",
        topic = topic,
        complexity_instructions = complexity_instructions,
        output = output_section::<CodeContent>(),
    )
}

pub fn audio_script_prompt(topic: &str, length: AudioLength) -> String {
    let length_instructions = match length {
        AudioLength::Brief => "Write a brief 2-3 minute script (about 400-600 words).",
        AudioLength::Detailed => "Write a detailed 5-8 minute script (about 1000-1500 words).",
    };

    format!(
        "You are an expert ML educator recording an audio lesson. Write a conversational script about \"{topic}\" for ML learners.

{length_instructions}

Write natural speech in a warm tone, as if a knowledgeable friend is explaining the idea. Use analogies, explain jargon when it first appears, and mark pauses with an ellipsis. Put an estimate such as \"3 minutes\" in the duration field.

{output}",
        topic = topic,
        length_instructions = length_instructions,
        output = output_section::<AudioContent>(),
    )
}

pub fn visual_generation_prompt(topic: &str) -> String {
    format!(
        "You are an ML educator who explains ideas with diagrams. Design 2-4 educational diagrams for \"{topic}\".

Each diagram needs a short label, a one or two sentence description, and a self-contained SVG document:
- use viewBox=\"0 0 800 500\"
- dark background #0B0F14, primary accent #00FF88, light text #E6F1F0
- labelled boxes, arrows and connections, font-size 14 or larger
- single quotes for SVG attributes so the JSON string needs no extra escaping
- valid XML

{output}",
        topic = topic,
        output = output_section::<VisualContent>(),
    )
}
