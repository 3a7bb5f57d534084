// glload/src/tests.rs

//! Unit tests, all driven through the mock backend so they run on machines
//! with no GL stack at all.

use crate::context::ContextAttributes;
use crate::error::{Error, WindowingApiError};
use crate::info::GLVersion;
use crate::loader::GlLoader;
use crate::platform::mock::{MockDriver, MockWindow};
use crate::NativeWindow;

fn mock_window() -> NativeWindow {
    NativeWindow::Mock(MockWindow {
        supplies_device_context: false,
    })
}

#[test]
fn test_load_opens_the_library_once() {
    let driver = MockDriver::new();
    let mut loader = GlLoader::with_mock(driver.clone());
    assert!(!loader.is_loaded());

    loader.load(false).unwrap();
    loader.load(false).unwrap();
    loader.load(true).unwrap();

    assert!(loader.is_loaded());
    assert_eq!(driver.library_opens(), 1);
}

#[test]
fn test_unload_is_idempotent() {
    let driver = MockDriver::new();
    let mut loader = GlLoader::with_mock(driver.clone());
    loader.load(false).unwrap();

    loader.unload();
    loader.unload();

    assert!(!loader.is_loaded());
    assert_eq!(driver.library_closes(), 1);
}

#[test]
fn test_load_functions_before_load_is_a_noop() {
    let mut loader = GlLoader::with_mock(MockDriver::new());
    loader.load_functions().unwrap();
    assert!(!loader.is_function_available("glClear"));
}

#[test]
fn test_resolution_respects_the_claimed_version() {
    let driver = MockDriver::new();
    driver.set_version(GLVersion::new(3, 3));
    let mut loader = GlLoader::with_mock(driver);
    loader.load(true).unwrap();

    // 1.1 and 3.1 entry points are covered by a 3.3 driver.
    assert!(loader.is_function_available("glClear"));
    assert!(loader.is_function_available("glDrawArraysInstanced"));
    // Bare names work too.
    assert!(loader.is_function_available("DrawArraysInstanced"));

    // 4.x entry points are not.
    assert!(!loader.is_function_available("glSpecializeShader"));
    assert!(!loader.is_function_available("glDispatchCompute"));

    // Unknown names are simply unavailable.
    assert!(!loader.is_function_available("glFrobnicate"));
}

#[test]
fn test_capabilities_follow_the_claimed_version() {
    let driver = MockDriver::new();
    driver.set_version(GLVersion::new(3, 3));
    let mut loader = GlLoader::with_mock(driver);
    loader.load(true).unwrap();

    let capabilities = loader.capabilities();
    assert!(capabilities.supports(GLVersion::new(1, 1)));
    assert!(capabilities.supports(GLVersion::new(3, 3)));
    assert!(!capabilities.supports(GLVersion::new(4, 0)));
    assert!(!capabilities.supports(GLVersion::new(4, 6)));
    assert!(capabilities.v2_0);
    assert!(!capabilities.v4_5);
}

#[test]
fn test_unload_resets_the_symbol_table() {
    let driver = MockDriver::new();
    let mut loader = GlLoader::with_mock(driver);
    loader.load(true).unwrap();
    assert!(loader.is_function_available("glClear"));

    loader.unload();
    assert!(!loader.is_function_available("glClear"));
    assert!(!loader.capabilities().supports(GLVersion::new(1, 1)));
}

#[test]
fn test_create_context_before_load_fails_cleanly() {
    let driver = MockDriver::new();
    let mut loader = GlLoader::with_mock(driver.clone());

    match loader.create_context(mock_window(), &ContextAttributes::default()) {
        Err(Error::NotLoaded) => {}
        result => panic!("unexpected result: {:?}", result.map(|_| ())),
    }

    // Nothing was acquired on the way out.
    assert_eq!(driver.device_contexts_acquired(), 0);
    assert_eq!(driver.contexts_created(), 0);
    assert!(loader.last_error().unwrap().contains("not loaded"));
}

#[test]
fn test_context_lifecycle_balances_resources() {
    let driver = MockDriver::new();
    let mut loader = GlLoader::with_mock(driver.clone());
    loader.load(true).unwrap();

    let mut context = loader
        .create_context(mock_window(), &ContextAttributes::default())
        .unwrap();
    assert!(context.is_valid());
    assert_eq!(driver.device_contexts_acquired(), 1);

    loader.present(&context).unwrap();
    loader.destroy_context(&mut context).unwrap();
    assert!(!context.is_valid());

    assert_eq!(driver.swaps(), 1);
    assert_eq!(driver.contexts_created(), 1);
    assert_eq!(driver.contexts_destroyed(), 1);
    assert_eq!(driver.device_contexts_acquired(), 1);
    assert_eq!(driver.device_contexts_released(), 1);
}

#[test]
fn test_borrowed_device_context_is_not_released() {
    let driver = MockDriver::new();
    let mut loader = GlLoader::with_mock(driver.clone());
    loader.load(true).unwrap();

    let window = NativeWindow::Mock(MockWindow {
        supplies_device_context: true,
    });
    let mut context = loader
        .create_context(window, &ContextAttributes::default())
        .unwrap();
    loader.destroy_context(&mut context).unwrap();

    assert_eq!(driver.device_contexts_acquired(), 0);
    assert_eq!(driver.device_contexts_released(), 0);
}

#[test]
fn test_pixel_format_failure_rolls_back() {
    let driver = MockDriver::new();
    driver.set_fail_pixel_format(true);
    let mut loader = GlLoader::with_mock(driver.clone());
    loader.load(true).unwrap();

    match loader.create_context(mock_window(), &ContextAttributes::default()) {
        Err(Error::PixelFormatSelectionFailed(WindowingApiError::BadPixelFormat)) => {}
        result => panic!("unexpected result: {:?}", result.map(|_| ())),
    }

    assert_eq!(driver.contexts_created(), 0);
    assert_eq!(
        driver.device_contexts_acquired(),
        driver.device_contexts_released()
    );
    assert!(loader.last_error().unwrap().contains("pixel format"));
}

#[test]
fn test_double_destroy_is_accepted() {
    let driver = MockDriver::new();
    let mut loader = GlLoader::with_mock(driver.clone());
    loader.load(true).unwrap();

    let mut context = loader
        .create_context(mock_window(), &ContextAttributes::default())
        .unwrap();
    loader.destroy_context(&mut context).unwrap();
    loader.destroy_context(&mut context).unwrap();

    assert_eq!(driver.contexts_destroyed(), 1);
    assert_eq!(driver.device_contexts_released(), 1);
}

#[test]
fn test_failed_destroy_leaves_the_context_destroyable() {
    let driver = MockDriver::new();
    let mut loader = GlLoader::with_mock(driver.clone());
    loader.load(true).unwrap();

    let mut context = loader
        .create_context(mock_window(), &ContextAttributes::default())
        .unwrap();

    // A destroy that cannot proceed must not take the native handles away:
    // the context stays valid and nothing is counted as released.
    driver.set_fail_destroy(true);
    match loader.destroy_context(&mut context) {
        Err(Error::ContextDestructionFailed(_)) => {}
        result => panic!("unexpected result: {:?}", result),
    }
    assert!(context.is_valid());
    assert_eq!(driver.contexts_destroyed(), 0);
    assert_eq!(driver.device_contexts_released(), 0);

    // Once destruction can proceed again, the same context tears down fully.
    driver.set_fail_destroy(false);
    loader.destroy_context(&mut context).unwrap();
    assert!(!context.is_valid());
    assert_eq!(driver.contexts_destroyed(), 1);
    assert_eq!(driver.device_contexts_released(), 1);
}

#[test]
fn test_present_after_destroy_is_a_noop() {
    let driver = MockDriver::new();
    let mut loader = GlLoader::with_mock(driver.clone());
    loader.load(true).unwrap();

    let mut context = loader
        .create_context(mock_window(), &ContextAttributes::default())
        .unwrap();
    loader.destroy_context(&mut context).unwrap();
    loader.present(&context).unwrap();

    assert_eq!(driver.swaps(), 0);
}

#[test]
fn test_missing_library_reports_an_error() {
    let driver = MockDriver::new();
    driver.set_library_present(false);
    let mut loader = GlLoader::with_mock(driver);

    match loader.load(true) {
        Err(Error::NoGLLibraryFound) => {}
        result => panic!("unexpected result: {:?}", result),
    }
    assert!(!loader.is_loaded());
    assert!(!loader.last_error().unwrap().is_empty());
}

#[test]
fn test_last_error_is_overwritten() {
    let driver = MockDriver::new();
    driver.set_library_present(false);
    let mut loader = GlLoader::with_mock(driver.clone());

    assert!(loader.load(false).is_err());
    let first = loader.last_error().unwrap().to_string();
    assert!(first.contains("library"));

    driver.set_library_present(true);
    driver.set_fail_pixel_format(true);
    loader.load(true).unwrap();
    assert!(loader
        .create_context(mock_window(), &ContextAttributes::default())
        .is_err());

    let second = loader.last_error().unwrap();
    assert_ne!(first, second);
    assert!(second.contains("pixel format"));
}

#[test]
fn test_context_ids_are_unique() {
    let driver = MockDriver::new();
    let mut loader = GlLoader::with_mock(driver);
    loader.load(true).unwrap();

    let mut first = loader
        .create_context(mock_window(), &ContextAttributes::default())
        .unwrap();
    let mut second = loader
        .create_context(mock_window(), &ContextAttributes::default())
        .unwrap();
    assert_ne!(first.id(), second.id());

    loader.destroy_context(&mut first).unwrap();
    loader.destroy_context(&mut second).unwrap();
}

#[test]
#[should_panic(expected = "destroyed explicitly")]
fn test_dropping_a_live_context_panics() {
    let driver = MockDriver::new();
    let mut loader = GlLoader::with_mock(driver);
    loader.load(true).unwrap();

    let context = loader
        .create_context(mock_window(), &ContextAttributes::default())
        .unwrap();
    drop(context);
}

#[test]
fn test_version_string_parsing() {
    assert_eq!(
        GLVersion::parse("4.6.0 NVIDIA 535.86.05"),
        Some(GLVersion::new(4, 6))
    );
    assert_eq!(
        GLVersion::parse("3.3 (Core Profile) Mesa 23.1.4"),
        Some(GLVersion::new(3, 3))
    );
    assert_eq!(
        GLVersion::parse("OpenGL ES 3.0 Mesa 23.1.4"),
        Some(GLVersion::new(3, 0))
    );
    assert_eq!(GLVersion::parse("2.1 mock driver"), Some(GLVersion::new(2, 1)));
    assert_eq!(GLVersion::parse("no digits here"), None);
    assert_eq!(GLVersion::parse(""), None);
}
