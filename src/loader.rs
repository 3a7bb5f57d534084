// glload/src/loader.rs

//! The loader facade.
//!
//! A [`GlLoader`] owns the open GL library handle, the resolved symbol
//! table, and the last human-readable error string. It is an ordinary value
//! the application owns and passes around, not a process-wide singleton, so
//! two loaders (say, a native one and a mock one under test) coexist without
//! touching each other.
//!
//! Loaders are single-threaded by design: `GlLoader` is neither `Send` nor
//! `Sync`, matching how GL contexts themselves are bound to a thread.

use crate::context::{Context, ContextID, NativeContext, NativeWindow, CREATE_CONTEXT_MUTEX};
use crate::error::Error;
use crate::gl::{Capabilities, Gl};
use crate::info::GLProfile;
use crate::library::GlLibrary;
use crate::platform::mock::{MockContext, MockDriver};

use std::rc::Rc;

enum Backend {
    Native,
    Mock(Rc<MockDriver>),
}

/// Owns the GL library binding and the resolved symbol table.
pub struct GlLoader {
    backend: Backend,
    library: Option<GlLibrary>,
    gl: Gl,
    last_error: Option<String>,
}

impl GlLoader {
    /// A loader for the platform's real GL library. Nothing is opened until
    /// [`GlLoader::load`] is called.
    pub fn new() -> GlLoader {
        GlLoader {
            backend: Backend::Native,
            library: None,
            gl: Gl::unloaded(),
            last_error: None,
        }
    }

    /// A loader backed by the given mock driver instead of a real library.
    pub fn with_mock(driver: Rc<MockDriver>) -> GlLoader {
        GlLoader {
            backend: Backend::Mock(driver),
            library: None,
            gl: Gl::unloaded(),
            last_error: None,
        }
    }

    /// Opens the GL library, and optionally resolves the whole symbol table
    /// right away.
    ///
    /// Idempotent: calling this on an already-loaded loader does not reopen
    /// the library. With `load_functions` set, resolution runs (again) even
    /// then, which is how a caller refreshes the table after a context
    /// became current.
    pub fn load(&mut self, load_functions: bool) -> Result<(), Error> {
        if self.library.is_none() {
            let library = match self.backend {
                Backend::Native => GlLibrary::open_native(),
                Backend::Mock(ref driver) => GlLibrary::open_mock(driver.clone()),
            };
            match library {
                Ok(library) => {
                    info!("GL library opened");
                    self.library = Some(library);
                }
                Err(error) => {
                    self.record_error("failed to open the GL library", &error);
                    return Err(error);
                }
            }
        }
        if load_functions {
            self.load_functions()?;
        }
        Ok(())
    }

    /// Closes the library and resets every symbol slot and capability flag.
    ///
    /// Idempotent; unloading a loader that was never loaded is a no-op. Any
    /// contexts created through this loader must already be destroyed.
    pub fn unload(&mut self) {
        if let Some(library) = self.library.take() {
            library.close();
            info!("GL library closed");
        }
        self.gl = Gl::unloaded();
        debug_assert!(!self.is_loaded());
    }

    /// Resolves the entire symbol table and refreshes the capability flags.
    ///
    /// Resolution failures are soft: a missing symbol leaves its slot
    /// unloaded and the walk continues. The capability flags come from the
    /// version the runtime claims, which is only answerable while a context
    /// is current; without one, all flags end up clear and a later call
    /// refreshes them.
    ///
    /// A no-op (with a warning) when the library is not open.
    pub fn load_functions(&mut self) -> Result<(), Error> {
        let GlLoader {
            ref library,
            ref mut gl,
            ..
        } = *self;
        let library = match *library {
            Some(ref library) => library,
            None => {
                warn!("load_functions called before load; ignoring");
                return Ok(());
            }
        };
        gl.resolve_all(&mut |name| library.get_proc_address(name));
        gl.capabilities = match gl.query_claimed_version() {
            Some(version) => {
                info!("GL runtime claims version {}.{}", version.major, version.minor);
                Capabilities::claimed(version)
            }
            None => {
                warn!("could not query the claimed GL version; no capabilities set");
                Capabilities::none()
            }
        };
        Ok(())
    }

    /// True once the library is open.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.library.is_some()
    }

    /// The resolved symbol table.
    #[inline]
    pub fn gl(&self) -> &Gl {
        &self.gl
    }

    /// The capability flags from the last [`GlLoader::load_functions`].
    #[inline]
    pub fn capabilities(&self) -> &Capabilities {
        &self.gl.capabilities
    }

    /// Whether a named GL function resolved to a callable pointer.
    #[inline]
    pub fn is_function_available(&self, name: &str) -> bool {
        self.gl.is_function_available(name)
    }

    /// The description of the most recent failure, if any. Overwritten by
    /// each new failure.
    #[inline]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Creates a legacy GL context for the given window and makes it
    /// current.
    ///
    /// The requested version and profile are accepted but not enforced; the
    /// legacy creation path delivers whatever the driver considers its
    /// compatibility context. Callers needing a specific core profile check
    /// [`GlLoader::capabilities`] after loading functions.
    ///
    /// Fails with [`Error::NotLoaded`] before [`GlLoader::load`], having
    /// acquired nothing.
    pub fn create_context(
        &mut self,
        window: NativeWindow,
        attributes: &crate::ContextAttributes,
    ) -> Result<Context, Error> {
        if self.library.is_none() {
            let error = Error::NotLoaded;
            self.record_error("cannot create a context", &error);
            return Err(error);
        }

        if attributes.profile != GLProfile::Legacy {
            warn!(
                "requested {:?} profile; the legacy creation path cannot guarantee it",
                attributes.profile
            );
        }

        let native = match self.create_native_context(window, attributes) {
            Ok(native) => native,
            Err(error) => {
                self.record_error("context creation failed", &error);
                return Err(error);
            }
        };

        let mut next_context_id = CREATE_CONTEXT_MUTEX.lock().unwrap();
        let id = *next_context_id;
        next_context_id.0 += 1;
        debug!("created context {:?}", id);
        Ok(Context { native, id })
    }

    fn create_native_context(
        &mut self,
        window: NativeWindow,
        attributes: &crate::ContextAttributes,
    ) -> Result<NativeContext, Error> {
        let library = match self.library {
            Some(ref library) => library,
            None => return Err(Error::NotLoaded),
        };
        match (library, window) {
            #[cfg(wgl_backend)]
            (
                &GlLibrary::Wgl(_),
                NativeWindow::Win32 {
                    window,
                    device_context,
                },
            ) => crate::platform::windows::context::WglContext::create(
                window,
                device_context,
                attributes,
            )
            .map(NativeContext::Wgl),
            #[cfg(glx_backend)]
            (&GlLibrary::Glx(ref library), NativeWindow::X11 { display, window }) => {
                crate::platform::unix::context::GlxContext::create(
                    library, display, window, attributes,
                )
                .map(NativeContext::Glx)
            }
            (&GlLibrary::Mock(ref driver), NativeWindow::Mock(window)) => {
                MockContext::create(driver.clone(), window, attributes).map(NativeContext::Mock)
            }
            _ => Err(Error::InvalidNativeWindow),
        }
    }

    /// Destroys a context created by this loader, releasing whatever the
    /// creation path acquired.
    ///
    /// Destroying an already-destroyed context is an accepted no-op. When
    /// teardown cannot proceed at all (for instance, the loader was unloaded
    /// and the GLX entry points are gone), the context keeps its native
    /// handles and stays valid, so the caller can reload and destroy it
    /// properly later.
    pub fn destroy_context(&mut self, context: &mut Context) -> Result<(), Error> {
        let result = match std::mem::replace(&mut context.native, NativeContext::None) {
            NativeContext::None => Ok(()),
            #[cfg(wgl_backend)]
            NativeContext::Wgl(mut native) => native.destroy(),
            #[cfg(glx_backend)]
            NativeContext::Glx(mut native) => match self.library {
                Some(GlLibrary::Glx(ref library)) => native.destroy(library),
                _ => {
                    context.native = NativeContext::Glx(native);
                    Err(Error::NotLoaded)
                }
            },
            NativeContext::Mock(mut native) => match native.destroy() {
                Ok(()) => Ok(()),
                Err(error) => {
                    context.native = NativeContext::Mock(native);
                    Err(error)
                }
            },
        };
        if let Err(ref error) = result {
            self.record_error("context destruction failed", error);
        }
        result
    }

    /// Swaps the window's back and front buffers.
    ///
    /// A graceful no-op on a context that has already been destroyed.
    pub fn present(&mut self, context: &Context) -> Result<(), Error> {
        let result = match context.native {
            NativeContext::None => {
                debug!("present on a destroyed context; ignoring");
                Ok(())
            }
            #[cfg(wgl_backend)]
            NativeContext::Wgl(ref native) => native.present(),
            #[cfg(glx_backend)]
            NativeContext::Glx(ref native) => match self.library {
                Some(GlLibrary::Glx(ref library)) => native.present(library),
                _ => Err(Error::NotLoaded),
            },
            NativeContext::Mock(ref native) => native.present(),
        };
        if let Err(ref error) = result {
            self.record_error("present failed", error);
        }
        result
    }

    fn record_error(&mut self, what: &str, error: &Error) {
        let message = format!("{}: {}", what, error);
        error!("{}", message);
        self.last_error = Some(message);
    }
}

impl Default for GlLoader {
    fn default() -> GlLoader {
        GlLoader::new()
    }
}
