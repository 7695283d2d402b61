#![cfg(test)]
use qnoise_core::extension::{ExtensionDescriptor, IncludeDir, Platform};

#[test]
fn flags_follow_platform_identifier() {
    let unix = ExtensionDescriptor::for_platform(Platform::from_identifier("linux"));
    let windows = ExtensionDescriptor::for_platform(Platform::from_identifier("win32"));

    assert_eq!(unix.extra_compile_args, &["-std=c++11", "-O3", "-Wall", "-fPIC"]);
    assert_eq!(windows.extra_compile_args, &["/std:c++14", "/O2"]);

    // Everything but the flags is shared
    assert_eq!(unix.module, windows.module);
    assert_eq!(unix.sources, windows.sources);
    assert_eq!(unix.include_dirs, windows.include_dirs);
}

#[test]
fn include_dirs_cover_binding_helper_and_core() {
    let descriptor = ExtensionDescriptor::for_host();
    assert_eq!(
        descriptor.include_dirs,
        [IncludeDir::BindingHelper, IncludeDir::Path("../cpp")]
    );
    assert!(descriptor.module.contains('.'));
}

#[test]
fn render_lists_flags_for_platform() {
    let rendered = ExtensionDescriptor::for_platform(Platform::Unix).render();
    assert!(rendered.contains("extra_compile_args = [\"-std=c++11\", \"-O3\", \"-Wall\", \"-fPIC\"]"));
    assert!(rendered.contains("module = \"qnoise._qnoise\""));
}
