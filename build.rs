//! Build script for the beacon library
//!
//! Handles:
//! - Optional linking of the vendor PHY library that exports the RF
//!   test-mode symbols (`rftest_init`, `phy_set_freq`, ...)

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(feature = "esp-phy")]
    {
        println!("cargo:rerun-if-env-changed=ESP_PHY_LIB_DIR");

        // Add the library search path when building outside the vendor SDK
        if let Ok(dir) = std::env::var("ESP_PHY_LIB_DIR") {
            println!("cargo:rustc-link-search={dir}");
        }

        // Link the PHY blob
        println!("cargo:rustc-link-lib=static=phy");
    }
}
