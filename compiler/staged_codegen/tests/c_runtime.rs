#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Runtime tests for the emitted C.
//!
//! A header is generated through [`Manifest::generate`], compiled together
//! with a small C driver by the system `cc`, and executed. Every test is
//! skipped when no `cc` is available.

use std::fs;
use std::process::{Command, Output};

use staged_codegen::{Manifest, Request, UnionField};
use tempfile::TempDir;

/// Check if a tool is available on the system.
fn tool_available(name: &str) -> bool {
    Command::new(name)
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn containers() -> Manifest {
    Manifest {
        prefix: String::new(),
        arena: false,
        requests: vec![
            Request::SparseSet { ty: "int".into() },
            Request::TaggedUnion {
                name: "Shape".into(),
                fields: vec![
                    UnionField::new("circle", "float"),
                    UnionField::new("square", "int"),
                ],
            },
        ],
    }
}

/// Compile `driver` against the generated header and run it.
///
/// Returns `None` when `cc` is missing.
fn compile_and_run(driver: &str) -> Option<Output> {
    if !tool_available("cc") {
        eprintln!("skipping: no `cc` on PATH");
        return None;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let header = containers().generate().expect("header generation failed");
    fs::write(temp_dir.path().join("containers.h"), header).expect("Failed to write header");

    let source_path = temp_dir.path().join("driver.c");
    let binary_path = temp_dir.path().join("driver");
    fs::write(&source_path, driver).expect("Failed to write driver");

    let compile = Command::new("cc")
        .arg("-std=c99")
        .arg("-I")
        .arg(temp_dir.path())
        .arg("-o")
        .arg(&binary_path)
        .arg(&source_path)
        .output()
        .expect("Failed to execute cc");
    assert!(
        compile.status.success(),
        "emitted C failed to compile:\n{}",
        String::from_utf8_lossy(&compile.stderr)
    );

    Some(
        Command::new(&binary_path)
            .output()
            .expect("Failed to execute binary"),
    )
}

fn assert_exit_zero(output: &Output, test_name: &str) {
    assert!(
        output.status.success(),
        "{test_name} failed with {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

const SPARSE_SET_ROUND_TRIP: &str = r#"
#include "containers.h"

static IntSSet set;

int main(void) {
    int value = 0;

    if(intsset_get(&set, 3, &value) != 1) return 10;
    intsset_remove(&set, 3);

    intsset_insert(&set, 3, 30);
    intsset_insert(&set, 7, 70);
    intsset_insert(&set, 0, 5);
    if(set.dense.len != 3) return 11;

    if(intsset_get(&set, 7, &value) != 0 || value != 70) return 12;
    if(intsset_get(&set, 7, NULL) != 0) return 13;
    if(intsset_get(&set, 5, NULL) != 1) return 14;
    if(intsset_get(&set, 1000, NULL) != 1) return 15;

    intsset_remove(&set, 3);
    if(intsset_get(&set, 3, NULL) != 1) return 16;
    if(intsset_get(&set, 7, &value) != 0 || value != 70) return 17;
    if(intsset_get(&set, 0, &value) != 0 || value != 5) return 18;
    if(set.dense.len != 2) return 19;

    intsset_remove(&set, 0);
    intsset_remove(&set, 7);
    if(set.dense.len != 0) return 20;
    intsset_remove(&set, 7);

    intsset_free(&set);
    return 0;
}
"#;

#[test]
fn test_sparse_set_round_trip() {
    if let Some(output) = compile_and_run(SPARSE_SET_ROUND_TRIP) {
        assert_exit_zero(&output, "sparse set round trip");
    }
}

const SPARSE_SET_RANDOM_OPS: &str = r#"
#include "containers.h"

#define SLOTS 256
#define STEPS 100000

static IntSSet set;
static int model[SLOTS];
static int present[SLOTS];

static unsigned long long rng_state = 12345;

static unsigned long next_random(void) {
    rng_state = rng_state * 6364136223846793005ULL + 1442695040888963407ULL;
    return (unsigned long)(rng_state >> 33);
}

static int check(void) {
    unsigned long occupied = 0;
    unsigned long i = 0;
    int value = 0;

    if(set.dense.len != set.dense_to_sparse.len) return 1;
    for(i = 0; i < set.sparse.len; i++) {
        unsigned long slot = set.sparse.items[i];
        if(slot == 0) continue;
        occupied++;
        if(slot - 1 >= set.dense_to_sparse.len) return 2;
        if(set.dense_to_sparse.items[slot - 1] != i) return 3;
    }
    if(occupied != set.dense.len) return 4;

    for(i = 0; i < SLOTS; i++) {
        int found = intsset_get(&set, i, &value) == 0;
        if(found != present[i]) return 5;
        if(found && value != model[i]) return 6;
    }
    return 0;
}

int main(void) {
    unsigned long step = 0;

    for(step = 0; step < STEPS; step++) {
        unsigned long index = next_random() % SLOTS;
        int status = 0;
        if(next_random() % 3 == 0) {
            intsset_remove(&set, index);
            present[index] = 0;
        } else {
            int value = (int)(next_random() % 100000);
            intsset_insert(&set, index, value);
            model[index] = value;
            present[index] = 1;
        }
        if(step % 97 == 0 || step + 1 == STEPS) {
            status = check();
            if(status != 0) return 10 + status;
        }
    }

    intsset_free(&set);
    return 0;
}
"#;

#[test]
fn test_sparse_set_random_ops_keep_invariant() {
    if let Some(output) = compile_and_run(SPARSE_SET_RANDOM_OPS) {
        assert_exit_zero(&output, "sparse set random ops");
    }
}

const TAGGED_UNION_ACCESS: &str = r#"
#include "containers.h"

int main(void) {
    Shape circle = shape_circle_make(1.5f);
    Shape square = shape_square_make(9);

    if(circle.tag != SHAPETAG_CIRCLE) return 10;
    if(shape_circle_get(circle) != 1.5f) return 11;
    if(square.tag != SHAPETAG_SQUARE) return 12;
    if(shape_square_get(square) != 9) return 13;
    if(SHAPETAG_COUNT != 2) return 14;
    return 0;
}
"#;

#[test]
fn test_tagged_union_make_and_get() {
    if let Some(output) = compile_and_run(TAGGED_UNION_ACCESS) {
        assert_exit_zero(&output, "tagged union access");
    }
}

const TAGGED_UNION_WRONG_TAG: &str = r#"
#include "containers.h"

int main(void) {
    Shape circle = shape_circle_make(1.5f);
    return shape_square_get(circle);
}
"#;

#[test]
fn test_tagged_union_wrong_tag_aborts() {
    if let Some(output) = compile_and_run(TAGGED_UNION_WRONG_TAG) {
        assert!(
            !output.status.success(),
            "reading the wrong member should fail the tag assertion"
        );
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("SHAPETAG_SQUARE"), "stderr: {stderr}");
    }
}
