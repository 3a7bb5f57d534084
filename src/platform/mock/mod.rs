// glload/src/platform/mock/mod.rs

//! A deterministic in-process GL driver.
//!
//! The mock driver stands in for `opengl32.dll`/`libGL` so that loader and
//! context-creation behavior can be exercised on machines with no GL stack.
//! It serves symbols out of the crate's own function table, gated by a
//! configurable claimed version, and keeps strict acquire/release counters
//! for the resources a real backend would have to balance.
//!
//! Only `glGetString` resolves to something genuinely callable; every other
//! symbol resolves to an inert stub, which is all the loader needs.

use crate::context::ContextAttributes;
use crate::error::{Error, WindowingApiError};
use crate::gl::types::{GLenum, GLubyte};
use crate::gl::{consts, ALL_FUNCTIONS};
use crate::info::GLVersion;

use std::cell::{Cell, RefCell};
use std::ffi::CString;
use std::os::raw::c_void;
use std::ptr;
use std::rc::Rc;

thread_local! {
    // Backing storage for what the mock glGetString returns. Per-thread so
    // parallel tests with different claimed versions do not race.
    static VERSION_STRING: RefCell<Option<CString>> = RefCell::new(None);
}

/// The mock driver's knobs and counters.
///
/// Clone the `Rc` handed to the loader to keep inspecting counters after the
/// loader has taken ownership of its copy.
pub struct MockDriver {
    version: Cell<GLVersion>,
    library_present: Cell<bool>,
    fail_pixel_format: Cell<bool>,
    fail_destroy: Cell<bool>,
    library_opens: Cell<u32>,
    library_closes: Cell<u32>,
    device_contexts_acquired: Cell<u32>,
    device_contexts_released: Cell<u32>,
    contexts_created: Cell<u32>,
    contexts_destroyed: Cell<u32>,
    swaps: Cell<u32>,
}

impl MockDriver {
    /// A driver claiming GL 4.6 with everything in working order.
    pub fn new() -> Rc<MockDriver> {
        Rc::new(MockDriver {
            version: Cell::new(GLVersion::new(4, 6)),
            library_present: Cell::new(true),
            fail_pixel_format: Cell::new(false),
            fail_destroy: Cell::new(false),
            library_opens: Cell::new(0),
            library_closes: Cell::new(0),
            device_contexts_acquired: Cell::new(0),
            device_contexts_released: Cell::new(0),
            contexts_created: Cell::new(0),
            contexts_destroyed: Cell::new(0),
            swaps: Cell::new(0),
        })
    }

    /// Sets the GL version the driver claims via `glGetString(GL_VERSION)`.
    pub fn set_version(&self, version: GLVersion) {
        self.version.set(version);
    }

    /// When false, opening the library fails as if no GL driver were
    /// installed.
    pub fn set_library_present(&self, present: bool) {
        self.library_present.set(present);
    }

    /// When true, pixel format negotiation fails during context creation.
    pub fn set_fail_pixel_format(&self, fail: bool) {
        self.fail_pixel_format.set(fail);
    }

    /// When true, context destruction fails before releasing anything, the
    /// way a native backend fails when its entry points are gone.
    pub fn set_fail_destroy(&self, fail: bool) {
        self.fail_destroy.set(fail);
    }

    pub fn library_opens(&self) -> u32 {
        self.library_opens.get()
    }

    pub fn library_closes(&self) -> u32 {
        self.library_closes.get()
    }

    pub fn device_contexts_acquired(&self) -> u32 {
        self.device_contexts_acquired.get()
    }

    pub fn device_contexts_released(&self) -> u32 {
        self.device_contexts_released.get()
    }

    pub fn contexts_created(&self) -> u32 {
        self.contexts_created.get()
    }

    pub fn contexts_destroyed(&self) -> u32 {
        self.contexts_destroyed.get()
    }

    pub fn swaps(&self) -> u32 {
        self.swaps.get()
    }

    pub(crate) fn open_library(&self) -> Result<(), Error> {
        if !self.library_present.get() {
            return Err(Error::NoGLLibraryFound);
        }
        let version = self.version.get();
        let version_string =
            CString::new(format!("{}.{} mock driver", version.major, version.minor))
                .unwrap_or_default();
        VERSION_STRING.with(|slot| *slot.borrow_mut() = Some(version_string));
        self.library_opens.set(self.library_opens.get() + 1);
        Ok(())
    }

    pub(crate) fn close_library(&self) {
        VERSION_STRING.with(|slot| *slot.borrow_mut() = None);
        self.library_closes.set(self.library_closes.get() + 1);
    }

    /// Serves a symbol if the claimed version covers it; null otherwise.
    pub(crate) fn get_proc_address(&self, name: &str) -> *const c_void {
        let claimed = self.version.get();
        match ALL_FUNCTIONS
            .iter()
            .find(|&&(function_name, _)| function_name == name)
        {
            Some(&(_, version)) if version <= claimed => {
                if name == "glGetString" {
                    mock_get_string as *const c_void
                } else {
                    mock_inert_fn as *const c_void
                }
            }
            _ => ptr::null(),
        }
    }
}

/// A mock window. There is no real surface behind it.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockWindow {
    /// Pretend the caller already holds a device context for this window.
    pub supplies_device_context: bool,
}

/// A live mock context, holding the resources it owes back to the driver.
pub(crate) struct MockContext {
    driver: Rc<MockDriver>,
    owns_device_context: bool,
}

impl MockContext {
    pub(crate) fn create(
        driver: Rc<MockDriver>,
        window: MockWindow,
        _attributes: &ContextAttributes,
    ) -> Result<MockContext, Error> {
        let owns_device_context = !window.supplies_device_context;
        if owns_device_context {
            driver
                .device_contexts_acquired
                .set(driver.device_contexts_acquired.get() + 1);
        }

        if driver.fail_pixel_format.get() {
            // Roll back what was acquired, as the native paths do.
            if owns_device_context {
                driver
                    .device_contexts_released
                    .set(driver.device_contexts_released.get() + 1);
            }
            return Err(Error::PixelFormatSelectionFailed(
                WindowingApiError::BadPixelFormat,
            ));
        }

        driver.contexts_created.set(driver.contexts_created.get() + 1);
        Ok(MockContext {
            driver,
            owns_device_context,
        })
    }

    pub(crate) fn destroy(&mut self) -> Result<(), Error> {
        if self.driver.fail_destroy.get() {
            // Nothing was released; the context still owes its resources.
            return Err(Error::ContextDestructionFailed(WindowingApiError::Failed));
        }
        self.driver
            .contexts_destroyed
            .set(self.driver.contexts_destroyed.get() + 1);
        if self.owns_device_context {
            self.driver
                .device_contexts_released
                .set(self.driver.device_contexts_released.get() + 1);
        }
        Ok(())
    }

    pub(crate) fn present(&self) -> Result<(), Error> {
        self.driver.swaps.set(self.driver.swaps.get() + 1);
        Ok(())
    }
}

unsafe extern "system" fn mock_get_string(name: GLenum) -> *const GLubyte {
    if name != consts::VERSION {
        return ptr::null();
    }
    VERSION_STRING.with(|slot| {
        slot.borrow()
            .as_ref()
            .map_or(ptr::null(), |string| string.as_ptr() as *const GLubyte)
    })
}

unsafe extern "system" fn mock_inert_fn() {}
