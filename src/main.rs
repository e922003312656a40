use sctables::{emit, Result};

// Output names are fixed; the consuming encoder includes these headers
// by name.
const BC7_HEADER: &str = "ConvectionKernels_BC7_SingleColor.h";
const S3TC_HEADER: &str = "ConvectionKernels_S3TC_SingleColor.h";
const ETC2_HEADER: &str = "ConvectionKernels_ETC2_Rounding.h";
const FAKE_BT709_HEADER: &str = "ConvectionKernels_FakeBT709_Rounding.h";

fn main() -> Result<()> {
    write_artifact(BC7_HEADER, &emit::bc7_header())?;
    write_artifact(S3TC_HEADER, &emit::s3tc_header())?;
    write_artifact(ETC2_HEADER, &emit::etc2_header())?;
    write_artifact(FAKE_BT709_HEADER, &emit::fake_bt709_header())?;
    Ok(())
}

// The header text is rendered completely before the write, so a failed
// run never leaves a partially written table file behind.
fn write_artifact(name: &str, text: &str) -> Result<()> {
    std::fs::write(name, text).map_err(|e| format!("Failed to write {}: {}", name, e))?;
    println!("Wrote {} ({} bytes)", name, text.len());
    Ok(())
}
