//! Built-in agent definitions.
//!
//! The definitions here are constructed from literal constants: building
//! one is deterministic, performs no I/O, and cannot fail.

use postline_protocol::agent_models::AgentDefinition;

/// Model backend used by the built-in definitions.
///
/// Kept as a named constant so a model swap never touches the
/// instruction text.
pub const GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Run-context key the initial post generator writes its output under.
///
/// Downstream stages may rely on this exact key.
pub const INITIAL_POST_OUTPUT_KEY: &str = "current_post";

/// Instruction handed verbatim to the model backend.
const INITIAL_POST_INSTRUCTION: &str = r#"You are a LinkedIn Post Generator.

Your task is to create a LinkedIn post about an Agent Development Kit (ADK) bootcamp.

## CONTENT REQUIREMENTS
Ensure the post includes:
1. Excitement about learning Google's Agent Development Kit
2. Showcase my github repo https://github.com/Mathews-Tom/Google-ADK-Bootcamp
3. Specific aspects of ADK learned and demonstrated in the bootcamp:
    - Basic agent implementation (basic-agent)
    - Tool integration (tool-agent)
    - Using LiteLLM (litellm-agent)
    - Managing sessions and memory
    - Persistent storage capabilities
    - Multi-agent orchestration
    - Stateful multi-agent systems
    - Callback systems
    - Sequential agents for pipeline workflows
    - Parallel agents for concurrent operations
    - Loop agents for iterative refinement
4. Brief statement about improving AI applications
5. Learn and apply ADK best practices
6. Understand the simplicity in complexity to build robust AI applications
7. Clear call-to-action for connections

## STYLE REQUIREMENTS
- Professional and conversational tone
- Between 2000-3000 characters
- Include emojis
- Include hashtags
- Show genuine enthusiasm
- Highlight practical applications

## OUTPUT INSTRUCTIONS
- Return ONLY the post content
- Do not add formatting markers or explanations
"#;

/// Build the initial post generator definition.
///
/// Produces the agent that drafts the LinkedIn post other stages refine.
/// Repeated calls yield value-equal records.
pub fn initial_post_generator() -> AgentDefinition {
    AgentDefinition {
        name: "InitialPostGenerator".to_string(),
        description: "Generates the initial LinkedIn post to start the refinement process"
            .to_string(),
        model: GEMINI_MODEL.to_string(),
        output_key: INITIAL_POST_OUTPUT_KEY.to_string(),
        instruction: INITIAL_POST_INSTRUCTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(initial_post_generator(), initial_post_generator());
    }

    #[test]
    fn test_field_values() {
        let def = initial_post_generator();
        assert_eq!(def.name, "InitialPostGenerator");
        assert_eq!(def.model, "gemini-2.0-flash");
        assert_eq!(def.output_key, "current_post");
        assert_eq!(
            def.description,
            "Generates the initial LinkedIn post to start the refinement process"
        );
    }

    #[test]
    fn test_built_in_definition_is_valid() {
        assert!(initial_post_generator().validate().is_ok());
    }

    #[test]
    fn test_instruction_content_markers() {
        let def = initial_post_generator();

        assert!(def.instruction.contains("Agent Development Kit (ADK)"));
        assert!(def
            .instruction
            .contains("https://github.com/Mathews-Tom/Google-ADK-Bootcamp"));

        // Bootcamp topic list.
        for topic in [
            "Basic agent implementation (basic-agent)",
            "Tool integration (tool-agent)",
            "Using LiteLLM (litellm-agent)",
            "Managing sessions and memory",
            "Persistent storage capabilities",
            "Multi-agent orchestration",
            "Stateful multi-agent systems",
            "Callback systems",
            "Sequential agents for pipeline workflows",
            "Parallel agents for concurrent operations",
            "Loop agents for iterative refinement",
        ] {
            assert!(
                def.instruction.contains(topic),
                "instruction should mention '{}'",
                topic
            );
        }
    }

    #[test]
    fn test_instruction_style_and_output_markers() {
        let def = initial_post_generator();
        assert!(def.instruction.contains("Between 2000-3000 characters"));
        assert!(def.instruction.contains("Include emojis"));
        assert!(def.instruction.contains("Include hashtags"));
        assert!(def.instruction.contains("Return ONLY the post content"));
    }

    #[test]
    fn test_model_constant_matches_definition() {
        assert_eq!(initial_post_generator().model, GEMINI_MODEL);
        assert_eq!(initial_post_generator().output_key, INITIAL_POST_OUTPUT_KEY);
    }
}
