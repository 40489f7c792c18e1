use crate::{CutIdentity, ElementKind, Prefixes, generate_filename};

use ElementKind::{Cut, Part, Scene, Version};

fn test_identity() -> CutIdentity {
    CutIdentity::new("TestPart", "TestScene")
}

fn all_permutations() -> Vec<[ElementKind; 4]> {
    let mut permutations = Vec::new();
    for a in ElementKind::ALL {
        for b in ElementKind::ALL {
            for c in ElementKind::ALL {
                for d in ElementKind::ALL {
                    let candidate = [a, b, c, d];
                    if ElementKind::ALL.iter().all(|k| candidate.contains(k)) {
                        permutations.push(candidate);
                    }
                }
            }
        }
    }
    permutations
}

/// WHAT: Explicit prefixes are prepended to every element
/// WHY: Reference filename agreed with the recorder operators
#[test]
fn given_full_prefixes_when_generating_then_all_elements_prefixed() {
    // Given: Prefixes for every element
    let prefixes = Prefixes::from([(Part, "P_"), (Scene, "S_"), (Cut, "C"), (Version, "v")]);

    // When: Generating with the default order
    let filename = generate_filename(&test_identity(), None, Some(&prefixes));

    // Then: Prefixed elements
    assert_eq!(filename, "P_TestPart_S_TestScene_C001_v01");
}

/// WHAT: An empty prefix map suppresses every default, including "v"
/// WHY: Empty mapping means "explicitly no prefixes", unlike no mapping
#[test]
fn given_empty_prefixes_when_generating_then_no_version_prefix() {
    // Given: Explicitly empty prefixes
    let prefixes = Prefixes::empty();

    // When: Generating
    let filename = generate_filename(&test_identity(), None, Some(&prefixes));

    // Then: Bare version number
    assert_eq!(filename, "TestPart_TestScene_001_01");
}

/// WHAT: Without a prefix map the version default "v" still applies
/// WHY: Distinguishes "not supplied" from "explicitly empty"
#[test]
fn given_no_prefixes_when_generating_then_version_default_applies() {
    // Given/When: No prefix map at all
    let filename = generate_filename(&test_identity(), None, None);

    // Then: Only the version carries a prefix
    assert_eq!(filename, "TestPart_TestScene_001_v01");
}

/// WHAT: Every permutation places the elements exactly in that order
/// WHY: The order setting is the operator's naming convention
#[test]
fn given_every_permutation_when_generating_then_elements_follow_order() {
    // Given: Distinct prefixes so each element is recognizable
    let identity = test_identity();
    let prefixes = Prefixes::from([(Part, "P"), (Scene, "S"), (Cut, "C"), (Version, "V")]);
    let permutations = all_permutations();
    assert_eq!(permutations.len(), 24);

    for order in permutations {
        // When: Generating with this order
        let filename = generate_filename(&identity, Some(&order), Some(&prefixes));

        // Then: Segments appear in order
        let expected: Vec<String> = order
            .iter()
            .map(|kind| match kind {
                Part => "PTestPart".to_string(),
                Scene => "STestScene".to_string(),
                Cut => "C001".to_string(),
                Version => "V01".to_string(),
            })
            .collect();
        assert_eq!(filename, expected.join("_"));
    }
}

/// WHAT: Part and scene are sanitized, numeric fields are not touched
/// WHY: Free text can contain path separators; numbers never do
#[test]
fn given_reserved_characters_in_labels_when_generating_then_labels_sanitized() {
    // Given: Labels with reserved characters and a slash in the cut prefix
    let identity = CutIdentity::new("Part/1", "Scene:A?");
    let prefixes = Prefixes::from([(Cut, "#"), (Version, "v")]);

    // When: Generating
    let filename = generate_filename(&identity, None, Some(&prefixes));

    // Then: Labels sanitized
    assert_eq!(filename, "Part_1_Scene_A__#001_v01");
}

/// WHAT: Generation is a pure function of its inputs
/// WHY: Preview and the sent filename must always agree
#[test]
fn given_same_inputs_when_generating_twice_then_same_output() {
    // Given: Fixed inputs
    let identity = test_identity();
    let order = [Scene, Cut, Part, Version];
    let prefixes = Prefixes::default();

    // When: Generating twice
    let first = generate_filename(&identity, Some(&order), Some(&prefixes));
    let second = generate_filename(&identity, Some(&order), Some(&prefixes));

    // Then: Identical
    assert_eq!(first, second);
    assert_eq!(first, "TestScene_001_TestPart_v01");
}

/// WHAT: A raw order with a repeated kind is rendered as given
/// WHY: Only FilenameConfig validates orders; the generator stays a pure formatter
#[test]
fn given_repeated_kind_in_raw_order_when_generating_then_rendered_verbatim() {
    // Given: Order repeating the cut
    let order = [Cut, Part, Cut, Version];

    // When
    let filename = generate_filename(&test_identity(), Some(&order), None);

    // Then: Scene missing, cut twice
    assert_eq!(filename, "001_TestPart_001_v01");
}
