use ucasm::{assemble, Assembly, Pass};

fn words(asm: &Assembly) -> Vec<u16> {
    asm.image
        .as_ref()
        .expect("image should be produced")
        .words()
        .iter()
        .map(|w| w.bits())
        .collect()
}

/// Assemble `source` and compare the start of the image with `expects`.
/// Every word past `expects` must be zero.
fn case(source: &[&str], expects: &[u16]) -> Assembly {
    let asm = assemble("case.s", source);
    println!("{}", asm.listing);

    let image = words(&asm);
    assert_eq!(&image[..expects.len()], expects);
    assert!(image[expects.len()..].iter().all(|w| *w == 0));
    asm
}

#[test]
fn backward_label() {
    let asm = case(&["LDI 05", "$1 ADI 01", "BNZ $1"], &[0xD05, 0x101, 0x901]);
    assert_eq!(asm.pass, Pass::Second);
    assert_eq!(asm.diag.summary(), None);
    assert_eq!(asm.diag.exit_code(), 0);
}

#[test]
fn forward_label() {
    let asm = case(&["JMP $1", "$1 ADI 00"], &[0xB01, 0x100]);
    assert_eq!(asm.diag.errors, 0);
    assert_eq!(asm.diag.warnings, 0);
}

#[test]
fn duplicate_label() {
    let asm = case(
        &["$1 ADI 00", "$1 ADI 01", "JMP $1"],
        &[0x100, 0x101, 0xB01],
    );
    assert_eq!(asm.diag.warnings, 1);
    assert_eq!(asm.diag.errors, 0);
    assert_eq!(asm.diag.exit_code(), 0);
    assert!(asm
        .listing
        .contains("Warning: multiple definitions of label \"$1\", the last definition wins.\n"));
}

#[test]
fn duplicate_label_n_times() {
    // Four declarations of $2: three are superseded. Every use, before or
    // after any of them, lands on the last one at 0x03.
    let asm = case(
        &[
            "$2 LDI 00",
            "BNZ $2",
            "$2 ; moved",
            "$2 LDI 01",
            "ORG 03",
            "$2 JMP $2",
        ],
        &[0xD00, 0x903, 0xD01, 0xB03],
    );
    assert_eq!(asm.diag.warnings, 3);
}

#[test]
fn duplicate_label_same_address() {
    // Both declarations sit at 0x00, but the first one is still superseded.
    let asm = case(&["$1", "$1 LDI 00", "JMP $1"], &[0xD00, 0xB00]);
    assert_eq!(asm.diag.warnings, 1);
    let lines: Vec<&str> = asm.listing.lines().collect();
    assert_eq!(
        lines[2],
        "Warning: multiple definitions of label \"$1\", the last definition wins."
    );
    assert_eq!(lines[3], "   1:   00              $1");
}

#[test]
fn undefined_label() {
    let asm = case(&["JMP $5"], &[0xB00]);
    assert_eq!(asm.diag.errors, 1);
    assert_eq!(asm.diag.exit_code(), 0);
    assert_eq!(
        asm.diag.summary().as_deref(),
        Some("There were 0 warning(s) and 1 error(s). Check listing file.")
    );
    assert!(asm
        .listing
        .contains("Error: label \"$5\" is not defined. Operand set to 00.\n"));
}

#[test]
fn unknown_mnemonic() {
    let asm = assemble("bad.s", &["FOO 01"]);
    assert_eq!(asm.pass, Pass::First);
    assert!(asm.image.is_none());
    assert_eq!(asm.diag.syntax_errors, 1);
    assert_eq!(asm.diag.exit_code(), 1);
    assert!(asm.listing.starts_with(
        " ---- Source file: bad.s. First pass assembler listing. ----\n\n"
    ));
    assert!(asm.listing.contains(
        "Syntax error: unexpected token \"FOO\". The source line is ignored.\n   1:\t\t\tFOO 01\n"
    ));
}

#[test]
fn origin() {
    let mut expects = vec![0; 0x10];
    expects.push(0xD0A);
    let asm = case(&["ORG 10", "LDI 0A"], &expects);
    assert_eq!(words(&asm)[0x10], 0xD0A);
    assert_eq!(words(&asm).iter().filter(|w| **w != 0).count(), 1);
}

#[test]
fn register_operands() {
    case(
        &[
            "ANA %00", "XRA %1F", "ADA %IX", "SBA %IY", "JPR @IX", "LDA @IY", "STA @IX+",
            "STX @IY+", "LDA @-IX", "STA @-IY",
        ],
        &[
            0x000, 0x21F, 0x4F8, 0x6F9, 0xAFA, 0xCFB, 0xEFC, 0xFFD, 0xCFE, 0xEFF,
        ],
    );
}

#[test]
fn immediate_operands() {
    case(
        &["ADI FF", "XRI 1", "ANI 7f", "SBI 80", "LDI 00"],
        &[0x1FF, 0x301, 0x57F, 0x780, 0xD00],
    );
}

#[test]
fn every_syntax_error_is_counted() {
    let source = [
        "LDI 05",
        "$ABC LDI 00",
        "LDA 01",
        "LDI %01",
        "JMP 01",
        "ADI $1",
        "ADI @IX",
        "LDI 100",
        "LDI 0G",
        "LDI",
        "LDI 01 02",
        "$1 ADI 01",
    ];
    let asm = assemble("errors.s", &source);
    assert!(asm.image.is_none());
    assert_eq!(asm.diag.syntax_errors, 10);
    assert_eq!(asm.diag.errors, 0);
    assert_eq!(asm.diag.warnings, 0);
    assert_eq!(asm.listing.matches("Syntax error:").count(), 10);
    // Good lines around the bad ones are still listed
    assert!(asm.listing.contains("   1:   00  D05"));
    assert!(asm.listing.contains("  12:   01  101         $1"));
}

#[test]
fn blank_and_comment_lines() {
    let asm = case(
        &["", "   ", "; header", "$7", "$8 ; label only", "LDI 01 ; Mixed Case Kept"],
        &[0xD01],
    );
    let lines: Vec<&str> = asm.listing.lines().collect();
    assert_eq!(
        lines[0],
        " ---- Source file: case.s. Second pass assembler listing. ----"
    );
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "   1:   00");
    assert_eq!(lines[4], format!("   3:   00{}; header", " ".repeat(38)));
    assert_eq!(lines[5], "   4:   00              $7");
    assert!(lines[7].ends_with("LDI      01     ; Mixed Case Kept"));
}

#[test]
fn case_insensitive() {
    let upper = ["$1 LDI 0A ; Comment", "STA @IX+", "JMP $1", "ORG F0", "LDA %A1"];
    let lower = ["$1 ldi 0a ; Comment", "sta @ix+", "jmp $1", "org f0", "lda %a1"];
    let a = assemble("x.s", &upper);
    let b = assemble("x.s", &lower);
    assert_eq!(a.image, b.image);
    assert_eq!(a.listing, b.listing);
}

#[test]
fn idempotent() {
    let source = ["JMP $2", "$1 LDI 01", "$2 BNC $1", "$1 ADI 02", "BNZ $9"];
    let a = assemble("x.s", &source);
    let b = assemble("x.s", &source);
    assert_eq!(a.listing, b.listing);
    assert_eq!(a.image, b.image);
    assert_eq!(a.diag, b.diag);
    assert_eq!(
        a.image.map(|image| image.render()),
        b.image.map(|image| image.render())
    );
}

#[test]
fn hex_dump() {
    let asm = case(&["LDI 05", "$1 ADI 01", "BNZ $1"], &[0xD05, 0x101, 0x901]);
    let dump = asm.image.expect("image").render();
    let rows: Vec<&str> = dump.lines().collect();
    assert_eq!(rows.len(), 16);
    assert_eq!(
        rows[0],
        " D05 101 901 000 000 000 000 000 000 000 000 000 000 000 000 000"
    );
}
