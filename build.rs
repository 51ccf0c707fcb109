use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let output_path = PathBuf::from_iter([out_dir, "lut.rs".into()]);
    let mut output_file = BufWriter::new(File::create(output_path)?);

    output_file.write_all(b"/// Two-digit uppercase hex rendering of every byte value.\n")?;
    output_file.write_all(b"pub const HEX_TO_STR_8: &[&str; 256] = &[\n")?;
    for byte in 0..=0xffu8 {
        writeln!(output_file, "    \"{byte:02X}\",")?;
    }
    output_file.write_all(b"];\n")?;

    println!("cargo:rerun-if-changed=build.rs");
    output_file.flush()
}
