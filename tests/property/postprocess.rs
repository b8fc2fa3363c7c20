//! Properties of stop-sequence truncation, token counting and prompt rendering

use prompt_playground::postprocess::trim_at_stop_sequences;
use prompt_playground::prompt::render_user_prompt;
use prompt_playground::tokens::count_tokens;
use proptest::prelude::*;

/// The trimmed output is a prefix of the input and contains no stop sequence.
#[test]
fn test_trim_yields_prefix_free_of_stop_sequences() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                "[a-cX ]{0,40}",
                proptest::collection::vec("[a-cX]{0,3}", 0..4),
            ),
            |(output, stops)| {
                let trimmed = trim_at_stop_sequences(&output, &stops);

                prop_assert!(output.starts_with(trimmed));
                for stop in stops.iter().filter(|s| !s.is_empty()) {
                    prop_assert!(!trimmed.contains(stop.as_str()));
                }
                if trimmed.len() < output.len() {
                    let rest = &output[trimmed.len()..];
                    prop_assert!(stops
                        .iter()
                        .any(|s| !s.is_empty() && rest.starts_with(s.as_str())));
                }
                Ok(())
            },
        )
        .unwrap();
}

/// Output without any stop sequence passes through untouched.
#[test]
fn test_trim_without_match_is_identity() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&"[a-z ]{0,60}", |output| {
            prop_assert_eq!(trim_at_stop_sequences(&output, &["0", "##"]), output.as_str());
            Ok(())
        })
        .unwrap();
}

/// Token counts never exceed the number of non-whitespace characters and are
/// zero only for blank text.
#[test]
fn test_token_count_bounds() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<String>(), |text| {
            let count = count_tokens(&text);
            let visible = text.chars().filter(|c| !c.is_whitespace()).count();
            prop_assert!(count <= visible);
            prop_assert_eq!(count == 0, visible == 0);
            Ok(())
        })
        .unwrap();
}

/// Rendering replaces the first placeholder occurrence only.
#[test]
fn test_render_replaces_first_placeholder() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&("[a-z ]{0,10}", "[A-Z]{1,8}"), |(prefix, product)| {
            let template = format!("{}{{product_name}} and {{product_name}}", prefix);
            let rendered = render_user_prompt(&template, &product);
            prop_assert_eq!(
                rendered,
                format!("{}{} and {{product_name}}", prefix, product)
            );
            Ok(())
        })
        .unwrap();
}
