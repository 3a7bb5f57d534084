// glload/src/gl/mod.rs
//
//! The GL symbol table.
//!
//! A [`Gl`] value is a flat namespace of resolved GL entry points, organized
//! into capability blocks keyed by GL version (1.1 through 4.6). The blocks
//! are cumulative: 4.6 does not redeclare what 1.1 already carries. Every
//! slot is filled at most once, by [`crate::GlLoader::load_functions`], and
//! reset en masse when the loader is torn down.
//!
//! Resolution is soft-failing: a symbol the driver does not export leaves its
//! slot unloaded and the walk continues. The per-block `is_present` flags in
//! [`Capabilities`] come from the version the runtime *claims*
//! (`glGetString(GL_VERSION)`), never from counting resolution hits; a block
//! can be "present" while individual slots in it stayed unresolved. Use
//! [`Gl::is_function_available`] rather than poking at raw pointers.

#![allow(clippy::too_many_arguments, clippy::missing_safety_doc)]

pub mod consts;
pub mod types;

use crate::info::GLVersion;

use self::types::*;
use std::mem;
use std::os::raw::c_void;

/// One resolved (or not) GL entry point.
///
/// This is the same shape `gl_generator`-style bindings use. The pointer is
/// never dangling: an unresolved slot dispatches to a panicking stub, and
/// `is_loaded` is the truth for availability.
#[derive(Clone, Copy)]
pub(crate) struct FnSlot {
    ptr: *const c_void,
    is_loaded: bool,
}

// The stub takes no arguments; calling a stubbed slot through any signature
// panics before any argument is read.
unsafe extern "system" fn missing_fn_panic() -> ! {
    panic!("GL function was not loaded")
}

impl FnSlot {
    fn unloaded() -> FnSlot {
        FnSlot {
            ptr: missing_fn_panic as *const c_void,
            is_loaded: false,
        }
    }

    fn resolve(resolve: &mut dyn FnMut(&'static str) -> *const c_void, name: &'static str) -> FnSlot {
        let ptr = resolve(name);
        if ptr.is_null() {
            debug!("unresolved GL function: {}", name);
            FnSlot::unloaded()
        } else {
            FnSlot { ptr, is_loaded: true }
        }
    }
}

macro_rules! gl_api {
    ($(block $block:ident ($major:literal, $minor:literal) {
        $(fn $Name:ident($($arg:ident: $ty:ty),*) $(-> $ret:ty)?;)*
    })+) => {
        /// Which GL versions the runtime claims to implement.
        ///
        /// One flag per capability block, set once from the parsed
        /// `GL_VERSION` string. Deliberately decoupled from per-symbol
        /// resolution results: this models what the driver advertises, not
        /// what it actually exported.
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct Capabilities {
            $(pub $block: bool,)+
        }

        impl Capabilities {
            pub(crate) fn none() -> Capabilities {
                Capabilities::default()
            }

            pub(crate) fn claimed(version: GLVersion) -> Capabilities {
                Capabilities {
                    $($block: version >= GLVersion::new($major, $minor),)+
                }
            }

            /// True if the runtime claims the given GL version.
            pub fn supports(&self, version: GLVersion) -> bool {
                $(
                    if version == GLVersion::new($major, $minor) {
                        return self.$block;
                    }
                )+
                false
            }
        }

        /// Every known entry point with the version block it belongs to, in
        /// ascending version order. This is the one table the resolution
        /// driver, the capability queries, and the mock driver all walk.
        pub(crate) static ALL_FUNCTIONS: &[(&str, GLVersion)] = &[
            $($(
                (concat!("gl", stringify!($Name)), GLVersion { major: $major, minor: $minor }),
            )*)+
        ];

        /// The resolved GL function pointers.
        #[allow(non_snake_case)]
        pub struct Gl {
            pub(crate) capabilities: Capabilities,
            $($(pub(crate) $Name: FnSlot,)*)+
        }

        #[allow(non_snake_case)]
        impl Gl {
            /// A table with every slot unloaded.
            pub(crate) fn unloaded() -> Gl {
                Gl {
                    capabilities: Capabilities::none(),
                    $($($Name: FnSlot::unloaded(),)*)+
                }
            }

            /// Fills every slot, walking the capability blocks in ascending
            /// version order. A resolver miss leaves the slot unloaded and
            /// the walk continues.
            pub(crate) fn resolve_all(
                &mut self,
                resolve: &mut dyn FnMut(&'static str) -> *const c_void,
            ) {
                $($(
                    self.$Name = FnSlot::resolve(resolve, concat!("gl", stringify!($Name)));
                )*)+
            }

            /// Whether a GL function resolved to a callable pointer.
            ///
            /// Accepts either the C name (`"glDrawArrays"`) or the bare name
            /// (`"DrawArrays"`). Unknown names are "unavailable".
            pub fn is_function_available(&self, name: &str) -> bool {
                let name = if name.len() > 2
                    && name.starts_with("gl")
                    && name.as_bytes()[2].is_ascii_uppercase()
                {
                    &name[2..]
                } else {
                    name
                };
                $($(
                    if name == stringify!($Name) {
                        return self.$Name.is_loaded;
                    }
                )*)+
                false
            }

            $($(
                #[inline]
                pub unsafe fn $Name(&self, $($arg: $ty),*) $(-> $ret)? {
                    mem::transmute::<
                        *const c_void,
                        unsafe extern "system" fn($($ty),*) $(-> $ret)?,
                    >(self.$Name.ptr)($($arg),*)
                }
            )*)+
        }
    };
}

impl Gl {
    /// The per-version capability flags.
    #[inline]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Asks the runtime which GL version it claims, via the resolved
    /// `glGetString`. `None` when the symbol is unavailable or the runtime
    /// answers with null or nonsense (both happen when no context is
    /// current).
    pub(crate) fn query_claimed_version(&self) -> Option<GLVersion> {
        if !self.GetString.is_loaded {
            return None;
        }
        unsafe {
            let version_string = self.GetString(consts::VERSION);
            if version_string.is_null() {
                return None;
            }
            let version_string =
                std::ffi::CStr::from_ptr(version_string as *const _).to_string_lossy();
            GLVersion::parse(&version_string)
        }
    }
}

gl_api! {
    block v1_1 (1, 1) {
        fn CullFace(mode: GLenum);
        fn FrontFace(mode: GLenum);
        fn Hint(target: GLenum, mode: GLenum);
        fn LineWidth(width: GLfloat);
        fn PointSize(size: GLfloat);
        fn PolygonMode(face: GLenum, mode: GLenum);
        fn Scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn TexParameterf(target: GLenum, pname: GLenum, param: GLfloat);
        fn TexParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat);
        fn TexParameteri(target: GLenum, pname: GLenum, param: GLint);
        fn TexParameteriv(target: GLenum, pname: GLenum, params: *const GLint);
        fn TexImage1D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei,
                      border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn TexImage2D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei,
                      height: GLsizei, border: GLint, format: GLenum, type_: GLenum,
                      pixels: *const c_void);
        fn DrawBuffer(buf: GLenum);
        fn Clear(mask: GLbitfield);
        fn ClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
        fn ClearStencil(s: GLint);
        fn ClearDepth(depth: GLdouble);
        fn StencilMask(mask: GLuint);
        fn ColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean);
        fn DepthMask(flag: GLboolean);
        fn Disable(cap: GLenum);
        fn Enable(cap: GLenum);
        fn Finish();
        fn Flush();
        fn BlendFunc(sfactor: GLenum, dfactor: GLenum);
        fn LogicOp(opcode: GLenum);
        fn StencilFunc(func: GLenum, reference: GLint, mask: GLuint);
        fn StencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum);
        fn DepthFunc(func: GLenum);
        fn PixelStoref(pname: GLenum, param: GLfloat);
        fn PixelStorei(pname: GLenum, param: GLint);
        fn ReadBuffer(src: GLenum);
        fn ReadPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum,
                      type_: GLenum, pixels: *mut c_void);
        fn GetBooleanv(pname: GLenum, data: *mut GLboolean);
        fn GetDoublev(pname: GLenum, data: *mut GLdouble);
        fn GetError() -> GLenum;
        fn GetFloatv(pname: GLenum, data: *mut GLfloat);
        fn GetIntegerv(pname: GLenum, data: *mut GLint);
        fn GetString(name: GLenum) -> *const GLubyte;
        fn GetTexImage(target: GLenum, level: GLint, format: GLenum, type_: GLenum,
                       pixels: *mut c_void);
        fn GetTexParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat);
        fn GetTexParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn GetTexLevelParameterfv(target: GLenum, level: GLint, pname: GLenum,
                                  params: *mut GLfloat);
        fn GetTexLevelParameteriv(target: GLenum, level: GLint, pname: GLenum,
                                  params: *mut GLint);
        fn IsEnabled(cap: GLenum) -> GLboolean;
        fn DepthRange(near: GLdouble, far: GLdouble);
        fn Viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn DrawArrays(mode: GLenum, first: GLint, count: GLsizei);
        fn DrawElements(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void);
        fn PolygonOffset(factor: GLfloat, units: GLfloat);
        fn CopyTexImage1D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint,
                          y: GLint, width: GLsizei, border: GLint);
        fn CopyTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint,
                          y: GLint, width: GLsizei, height: GLsizei, border: GLint);
        fn CopyTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, x: GLint, y: GLint,
                             width: GLsizei);
        fn CopyTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
                             x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn TexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei,
                         format: GLenum, type_: GLenum, pixels: *const c_void);
        fn TexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
                         width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum,
                         pixels: *const c_void);
        fn BindTexture(target: GLenum, texture: GLuint);
        fn DeleteTextures(n: GLsizei, textures: *const GLuint);
        fn GenTextures(n: GLsizei, textures: *mut GLuint);
        fn IsTexture(texture: GLuint) -> GLboolean;
    }

    block v1_2 (1, 2) {
        fn DrawRangeElements(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei,
                             type_: GLenum, indices: *const c_void);
        fn TexImage3D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei,
                      height: GLsizei, depth: GLsizei, border: GLint, format: GLenum,
                      type_: GLenum, pixels: *const c_void);
        fn TexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
                         zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei,
                         format: GLenum, type_: GLenum, pixels: *const c_void);
        fn CopyTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
                             zoffset: GLint, x: GLint, y: GLint, width: GLsizei,
                             height: GLsizei);
    }

    block v1_3 (1, 3) {
        fn ActiveTexture(texture: GLenum);
        fn SampleCoverage(value: GLfloat, invert: GLboolean);
        fn CompressedTexImage3D(target: GLenum, level: GLint, internalformat: GLenum,
                                width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint,
                                image_size: GLsizei, data: *const c_void);
        fn CompressedTexImage2D(target: GLenum, level: GLint, internalformat: GLenum,
                                width: GLsizei, height: GLsizei, border: GLint,
                                image_size: GLsizei, data: *const c_void);
        fn CompressedTexImage1D(target: GLenum, level: GLint, internalformat: GLenum,
                                width: GLsizei, border: GLint, image_size: GLsizei,
                                data: *const c_void);
        fn CompressedTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
                                   zoffset: GLint, width: GLsizei, height: GLsizei,
                                   depth: GLsizei, format: GLenum, image_size: GLsizei,
                                   data: *const c_void);
        fn CompressedTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
                                   width: GLsizei, height: GLsizei, format: GLenum,
                                   image_size: GLsizei, data: *const c_void);
        fn CompressedTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei,
                                   format: GLenum, image_size: GLsizei, data: *const c_void);
        fn GetCompressedTexImage(target: GLenum, level: GLint, img: *mut c_void);
    }

    block v1_4 (1, 4) {
        fn BlendFuncSeparate(sfactor_rgb: GLenum, dfactor_rgb: GLenum, sfactor_alpha: GLenum,
                             dfactor_alpha: GLenum);
        fn MultiDrawArrays(mode: GLenum, first: *const GLint, count: *const GLsizei,
                           drawcount: GLsizei);
        fn MultiDrawElements(mode: GLenum, count: *const GLsizei, type_: GLenum,
                             indices: *const *const c_void, drawcount: GLsizei);
        fn PointParameterf(pname: GLenum, param: GLfloat);
        fn PointParameterfv(pname: GLenum, params: *const GLfloat);
        fn PointParameteri(pname: GLenum, param: GLint);
        fn PointParameteriv(pname: GLenum, params: *const GLint);
        fn BlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
        fn BlendEquation(mode: GLenum);
    }

    block v1_5 (1, 5) {
        fn GenQueries(n: GLsizei, ids: *mut GLuint);
        fn DeleteQueries(n: GLsizei, ids: *const GLuint);
        fn IsQuery(id: GLuint) -> GLboolean;
        fn BeginQuery(target: GLenum, id: GLuint);
        fn EndQuery(target: GLenum);
        fn GetQueryiv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn GetQueryObjectiv(id: GLuint, pname: GLenum, params: *mut GLint);
        fn GetQueryObjectuiv(id: GLuint, pname: GLenum, params: *mut GLuint);
        fn BindBuffer(target: GLenum, buffer: GLuint);
        fn DeleteBuffers(n: GLsizei, buffers: *const GLuint);
        fn GenBuffers(n: GLsizei, buffers: *mut GLuint);
        fn IsBuffer(buffer: GLuint) -> GLboolean;
        fn BufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum);
        fn BufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr,
                         data: *const c_void);
        fn GetBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr,
                            data: *mut c_void);
        fn MapBuffer(target: GLenum, access: GLenum) -> *mut c_void;
        fn UnmapBuffer(target: GLenum) -> GLboolean;
        fn GetBufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn GetBufferPointerv(target: GLenum, pname: GLenum, params: *mut *mut c_void);
    }

    block v2_0 (2, 0) {
        fn BlendEquationSeparate(mode_rgb: GLenum, mode_alpha: GLenum);
        fn DrawBuffers(n: GLsizei, bufs: *const GLenum);
        fn StencilOpSeparate(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum);
        fn StencilFuncSeparate(face: GLenum, func: GLenum, reference: GLint, mask: GLuint);
        fn StencilMaskSeparate(face: GLenum, mask: GLuint);
        fn AttachShader(program: GLuint, shader: GLuint);
        fn BindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar);
        fn CompileShader(shader: GLuint);
        fn CreateProgram() -> GLuint;
        fn CreateShader(type_: GLenum) -> GLuint;
        fn DeleteProgram(program: GLuint);
        fn DeleteShader(shader: GLuint);
        fn DetachShader(program: GLuint, shader: GLuint);
        fn DisableVertexAttribArray(index: GLuint);
        fn EnableVertexAttribArray(index: GLuint);
        fn GetActiveAttrib(program: GLuint, index: GLuint, buf_size: GLsizei,
                           length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum,
                           name: *mut GLchar);
        fn GetActiveUniform(program: GLuint, index: GLuint, buf_size: GLsizei,
                            length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum,
                            name: *mut GLchar);
        fn GetAttachedShaders(program: GLuint, max_count: GLsizei, count: *mut GLsizei,
                              shaders: *mut GLuint);
        fn GetAttribLocation(program: GLuint, name: *const GLchar) -> GLint;
        fn GetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint);
        fn GetProgramInfoLog(program: GLuint, buf_size: GLsizei, length: *mut GLsizei,
                             info_log: *mut GLchar);
        fn GetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint);
        fn GetShaderInfoLog(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei,
                            info_log: *mut GLchar);
        fn GetShaderSource(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei,
                           source: *mut GLchar);
        fn GetUniformLocation(program: GLuint, name: *const GLchar) -> GLint;
        fn GetUniformfv(program: GLuint, location: GLint, params: *mut GLfloat);
        fn GetUniformiv(program: GLuint, location: GLint, params: *mut GLint);
        fn GetVertexAttribdv(index: GLuint, pname: GLenum, params: *mut GLdouble);
        fn GetVertexAttribfv(index: GLuint, pname: GLenum, params: *mut GLfloat);
        fn GetVertexAttribiv(index: GLuint, pname: GLenum, params: *mut GLint);
        fn GetVertexAttribPointerv(index: GLuint, pname: GLenum, pointer: *mut *mut c_void);
        fn IsProgram(program: GLuint) -> GLboolean;
        fn IsShader(shader: GLuint) -> GLboolean;
        fn LinkProgram(program: GLuint);
        fn ShaderSource(shader: GLuint, count: GLsizei, string: *const *const GLchar,
                        length: *const GLint);
        fn UseProgram(program: GLuint);
        fn Uniform1f(location: GLint, v0: GLfloat);
        fn Uniform2f(location: GLint, v0: GLfloat, v1: GLfloat);
        fn Uniform3f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
        fn Uniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
        fn Uniform1i(location: GLint, v0: GLint);
        fn Uniform2i(location: GLint, v0: GLint, v1: GLint);
        fn Uniform3i(location: GLint, v0: GLint, v1: GLint, v2: GLint);
        fn Uniform4i(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
        fn Uniform1fv(location: GLint, count: GLsizei, value: *const GLfloat);
        fn Uniform2fv(location: GLint, count: GLsizei, value: *const GLfloat);
        fn Uniform3fv(location: GLint, count: GLsizei, value: *const GLfloat);
        fn Uniform4fv(location: GLint, count: GLsizei, value: *const GLfloat);
        fn Uniform1iv(location: GLint, count: GLsizei, value: *const GLint);
        fn Uniform2iv(location: GLint, count: GLsizei, value: *const GLint);
        fn Uniform3iv(location: GLint, count: GLsizei, value: *const GLint);
        fn Uniform4iv(location: GLint, count: GLsizei, value: *const GLint);
        fn UniformMatrix2fv(location: GLint, count: GLsizei, transpose: GLboolean,
                            value: *const GLfloat);
        fn UniformMatrix3fv(location: GLint, count: GLsizei, transpose: GLboolean,
                            value: *const GLfloat);
        fn UniformMatrix4fv(location: GLint, count: GLsizei, transpose: GLboolean,
                            value: *const GLfloat);
        fn ValidateProgram(program: GLuint);
        fn VertexAttrib1f(index: GLuint, x: GLfloat);
        fn VertexAttrib2f(index: GLuint, x: GLfloat, y: GLfloat);
        fn VertexAttrib3f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat);
        fn VertexAttrib4f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
        fn VertexAttrib4fv(index: GLuint, v: *const GLfloat);
        fn VertexAttribPointer(index: GLuint, size: GLint, type_: GLenum, normalized: GLboolean,
                               stride: GLsizei, pointer: *const c_void);
    }

    block v2_1 (2, 1) {
        fn UniformMatrix2x3fv(location: GLint, count: GLsizei, transpose: GLboolean,
                              value: *const GLfloat);
        fn UniformMatrix3x2fv(location: GLint, count: GLsizei, transpose: GLboolean,
                              value: *const GLfloat);
        fn UniformMatrix2x4fv(location: GLint, count: GLsizei, transpose: GLboolean,
                              value: *const GLfloat);
        fn UniformMatrix4x2fv(location: GLint, count: GLsizei, transpose: GLboolean,
                              value: *const GLfloat);
        fn UniformMatrix3x4fv(location: GLint, count: GLsizei, transpose: GLboolean,
                              value: *const GLfloat);
        fn UniformMatrix4x3fv(location: GLint, count: GLsizei, transpose: GLboolean,
                              value: *const GLfloat);
    }

    block v3_0 (3, 0) {
        fn ColorMaski(index: GLuint, r: GLboolean, g: GLboolean, b: GLboolean, a: GLboolean);
        fn GetBooleani_v(target: GLenum, index: GLuint, data: *mut GLboolean);
        fn GetIntegeri_v(target: GLenum, index: GLuint, data: *mut GLint);
        fn Enablei(target: GLenum, index: GLuint);
        fn Disablei(target: GLenum, index: GLuint);
        fn IsEnabledi(target: GLenum, index: GLuint) -> GLboolean;
        fn BeginTransformFeedback(primitive_mode: GLenum);
        fn EndTransformFeedback();
        fn BindBufferRange(target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr,
                           size: GLsizeiptr);
        fn BindBufferBase(target: GLenum, index: GLuint, buffer: GLuint);
        fn TransformFeedbackVaryings(program: GLuint, count: GLsizei,
                                     varyings: *const *const GLchar, buffer_mode: GLenum);
        fn GetTransformFeedbackVarying(program: GLuint, index: GLuint, buf_size: GLsizei,
                                       length: *mut GLsizei, size: *mut GLsizei,
                                       type_: *mut GLenum, name: *mut GLchar);
        fn ClampColor(target: GLenum, clamp: GLenum);
        fn BeginConditionalRender(id: GLuint, mode: GLenum);
        fn EndConditionalRender();
        fn VertexAttribIPointer(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei,
                                pointer: *const c_void);
        fn GetVertexAttribIiv(index: GLuint, pname: GLenum, params: *mut GLint);
        fn GetVertexAttribIuiv(index: GLuint, pname: GLenum, params: *mut GLuint);
        fn VertexAttribI4i(index: GLuint, x: GLint, y: GLint, z: GLint, w: GLint);
        fn VertexAttribI4ui(index: GLuint, x: GLuint, y: GLuint, z: GLuint, w: GLuint);
        fn VertexAttribI4iv(index: GLuint, v: *const GLint);
        fn VertexAttribI4uiv(index: GLuint, v: *const GLuint);
        fn GetUniformuiv(program: GLuint, location: GLint, params: *mut GLuint);
        fn BindFragDataLocation(program: GLuint, color: GLuint, name: *const GLchar);
        fn GetFragDataLocation(program: GLuint, name: *const GLchar) -> GLint;
        fn Uniform1ui(location: GLint, v0: GLuint);
        fn Uniform2ui(location: GLint, v0: GLuint, v1: GLuint);
        fn Uniform3ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
        fn Uniform4ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint);
        fn Uniform1uiv(location: GLint, count: GLsizei, value: *const GLuint);
        fn Uniform2uiv(location: GLint, count: GLsizei, value: *const GLuint);
        fn Uniform3uiv(location: GLint, count: GLsizei, value: *const GLuint);
        fn Uniform4uiv(location: GLint, count: GLsizei, value: *const GLuint);
        fn TexParameterIiv(target: GLenum, pname: GLenum, params: *const GLint);
        fn TexParameterIuiv(target: GLenum, pname: GLenum, params: *const GLuint);
        fn GetTexParameterIiv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn GetTexParameterIuiv(target: GLenum, pname: GLenum, params: *mut GLuint);
        fn ClearBufferiv(buffer: GLenum, drawbuffer: GLint, value: *const GLint);
        fn ClearBufferuiv(buffer: GLenum, drawbuffer: GLint, value: *const GLuint);
        fn ClearBufferfv(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat);
        fn ClearBufferfi(buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
        fn GetStringi(name: GLenum, index: GLuint) -> *const GLubyte;
        fn IsRenderbuffer(renderbuffer: GLuint) -> GLboolean;
        fn BindRenderbuffer(target: GLenum, renderbuffer: GLuint);
        fn DeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint);
        fn GenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint);
        fn RenderbufferStorage(target: GLenum, internalformat: GLenum, width: GLsizei,
                               height: GLsizei);
        fn GetRenderbufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn IsFramebuffer(framebuffer: GLuint) -> GLboolean;
        fn BindFramebuffer(target: GLenum, framebuffer: GLuint);
        fn DeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint);
        fn GenFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
        fn CheckFramebufferStatus(target: GLenum) -> GLenum;
        fn FramebufferTexture1D(target: GLenum, attachment: GLenum, textarget: GLenum,
                                texture: GLuint, level: GLint);
        fn FramebufferTexture2D(target: GLenum, attachment: GLenum, textarget: GLenum,
                                texture: GLuint, level: GLint);
        fn FramebufferTexture3D(target: GLenum, attachment: GLenum, textarget: GLenum,
                                texture: GLuint, level: GLint, zoffset: GLint);
        fn FramebufferRenderbuffer(target: GLenum, attachment: GLenum,
                                   renderbuffertarget: GLenum, renderbuffer: GLuint);
        fn GetFramebufferAttachmentParameteriv(target: GLenum, attachment: GLenum,
                                               pname: GLenum, params: *mut GLint);
        fn GenerateMipmap(target: GLenum);
        fn BlitFramebuffer(src_x0: GLint, src_y0: GLint, src_x1: GLint, src_y1: GLint,
                           dst_x0: GLint, dst_y0: GLint, dst_x1: GLint, dst_y1: GLint,
                           mask: GLbitfield, filter: GLenum);
        fn RenderbufferStorageMultisample(target: GLenum, samples: GLsizei,
                                          internalformat: GLenum, width: GLsizei,
                                          height: GLsizei);
        fn FramebufferTextureLayer(target: GLenum, attachment: GLenum, texture: GLuint,
                                   level: GLint, layer: GLint);
        fn MapBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr,
                          access: GLbitfield) -> *mut c_void;
        fn FlushMappedBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr);
        fn BindVertexArray(array: GLuint);
        fn DeleteVertexArrays(n: GLsizei, arrays: *const GLuint);
        fn GenVertexArrays(n: GLsizei, arrays: *mut GLuint);
        fn IsVertexArray(array: GLuint) -> GLboolean;
    }

    block v3_1 (3, 1) {
        fn DrawArraysInstanced(mode: GLenum, first: GLint, count: GLsizei,
                               instancecount: GLsizei);
        fn DrawElementsInstanced(mode: GLenum, count: GLsizei, type_: GLenum,
                                 indices: *const c_void, instancecount: GLsizei);
        fn TexBuffer(target: GLenum, internalformat: GLenum, buffer: GLuint);
        fn PrimitiveRestartIndex(index: GLuint);
        fn CopyBufferSubData(read_target: GLenum, write_target: GLenum, read_offset: GLintptr,
                             write_offset: GLintptr, size: GLsizeiptr);
        fn GetUniformIndices(program: GLuint, uniform_count: GLsizei,
                             uniform_names: *const *const GLchar, uniform_indices: *mut GLuint);
        fn GetActiveUniformsiv(program: GLuint, uniform_count: GLsizei,
                               uniform_indices: *const GLuint, pname: GLenum,
                               params: *mut GLint);
        fn GetActiveUniformName(program: GLuint, uniform_index: GLuint, buf_size: GLsizei,
                                length: *mut GLsizei, uniform_name: *mut GLchar);
        fn GetUniformBlockIndex(program: GLuint, uniform_block_name: *const GLchar) -> GLuint;
        fn GetActiveUniformBlockiv(program: GLuint, uniform_block_index: GLuint, pname: GLenum,
                                   params: *mut GLint);
        fn GetActiveUniformBlockName(program: GLuint, uniform_block_index: GLuint,
                                     buf_size: GLsizei, length: *mut GLsizei,
                                     uniform_block_name: *mut GLchar);
        fn UniformBlockBinding(program: GLuint, uniform_block_index: GLuint,
                               uniform_block_binding: GLuint);
    }

    block v3_2 (3, 2) {
        fn DrawElementsBaseVertex(mode: GLenum, count: GLsizei, type_: GLenum,
                                  indices: *const c_void, basevertex: GLint);
        fn DrawRangeElementsBaseVertex(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei,
                                       type_: GLenum, indices: *const c_void,
                                       basevertex: GLint);
        fn DrawElementsInstancedBaseVertex(mode: GLenum, count: GLsizei, type_: GLenum,
                                           indices: *const c_void, instancecount: GLsizei,
                                           basevertex: GLint);
        fn MultiDrawElementsBaseVertex(mode: GLenum, count: *const GLsizei, type_: GLenum,
                                       indices: *const *const c_void, drawcount: GLsizei,
                                       basevertex: *const GLint);
        fn ProvokingVertex(mode: GLenum);
        fn FenceSync(condition: GLenum, flags: GLbitfield) -> GLsync;
        fn IsSync(sync: GLsync) -> GLboolean;
        fn DeleteSync(sync: GLsync);
        fn ClientWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum;
        fn WaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64);
        fn GetInteger64v(pname: GLenum, data: *mut GLint64);
        fn GetSynciv(sync: GLsync, pname: GLenum, count: GLsizei, length: *mut GLsizei,
                     values: *mut GLint);
        fn GetInteger64i_v(target: GLenum, index: GLuint, data: *mut GLint64);
        fn GetBufferParameteri64v(target: GLenum, pname: GLenum, params: *mut GLint64);
        fn FramebufferTexture(target: GLenum, attachment: GLenum, texture: GLuint,
                              level: GLint);
        fn TexImage2DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum,
                                 width: GLsizei, height: GLsizei,
                                 fixedsamplelocations: GLboolean);
        fn TexImage3DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum,
                                 width: GLsizei, height: GLsizei, depth: GLsizei,
                                 fixedsamplelocations: GLboolean);
        fn GetMultisamplefv(pname: GLenum, index: GLuint, val: *mut GLfloat);
        fn SampleMaski(mask_number: GLuint, mask: GLbitfield);
    }

    block v3_3 (3, 3) {
        fn BindFragDataLocationIndexed(program: GLuint, color_number: GLuint, index: GLuint,
                                       name: *const GLchar);
        fn GetFragDataIndex(program: GLuint, name: *const GLchar) -> GLint;
        fn GenSamplers(count: GLsizei, samplers: *mut GLuint);
        fn DeleteSamplers(count: GLsizei, samplers: *const GLuint);
        fn IsSampler(sampler: GLuint) -> GLboolean;
        fn BindSampler(unit: GLuint, sampler: GLuint);
        fn SamplerParameteri(sampler: GLuint, pname: GLenum, param: GLint);
        fn SamplerParameteriv(sampler: GLuint, pname: GLenum, param: *const GLint);
        fn SamplerParameterf(sampler: GLuint, pname: GLenum, param: GLfloat);
        fn SamplerParameterfv(sampler: GLuint, pname: GLenum, param: *const GLfloat);
        fn SamplerParameterIiv(sampler: GLuint, pname: GLenum, param: *const GLint);
        fn SamplerParameterIuiv(sampler: GLuint, pname: GLenum, param: *const GLuint);
        fn GetSamplerParameteriv(sampler: GLuint, pname: GLenum, params: *mut GLint);
        fn GetSamplerParameterIiv(sampler: GLuint, pname: GLenum, params: *mut GLint);
        fn GetSamplerParameterfv(sampler: GLuint, pname: GLenum, params: *mut GLfloat);
        fn GetSamplerParameterIuiv(sampler: GLuint, pname: GLenum, params: *mut GLuint);
        fn QueryCounter(id: GLuint, target: GLenum);
        fn GetQueryObjecti64v(id: GLuint, pname: GLenum, params: *mut GLint64);
        fn GetQueryObjectui64v(id: GLuint, pname: GLenum, params: *mut GLuint64);
        fn VertexAttribDivisor(index: GLuint, divisor: GLuint);
    }

    block v4_0 (4, 0) {
        fn MinSampleShading(value: GLfloat);
        fn BlendEquationi(buf: GLuint, mode: GLenum);
        fn BlendEquationSeparatei(buf: GLuint, mode_rgb: GLenum, mode_alpha: GLenum);
        fn BlendFunci(buf: GLuint, src: GLenum, dst: GLenum);
        fn BlendFuncSeparatei(buf: GLuint, src_rgb: GLenum, dst_rgb: GLenum, src_alpha: GLenum,
                              dst_alpha: GLenum);
        fn DrawArraysIndirect(mode: GLenum, indirect: *const c_void);
        fn DrawElementsIndirect(mode: GLenum, type_: GLenum, indirect: *const c_void);
        fn Uniform1d(location: GLint, x: GLdouble);
        fn Uniform2d(location: GLint, x: GLdouble, y: GLdouble);
        fn Uniform3d(location: GLint, x: GLdouble, y: GLdouble, z: GLdouble);
        fn Uniform4d(location: GLint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
        fn Uniform1dv(location: GLint, count: GLsizei, value: *const GLdouble);
        fn Uniform2dv(location: GLint, count: GLsizei, value: *const GLdouble);
        fn Uniform3dv(location: GLint, count: GLsizei, value: *const GLdouble);
        fn Uniform4dv(location: GLint, count: GLsizei, value: *const GLdouble);
        fn UniformMatrix2dv(location: GLint, count: GLsizei, transpose: GLboolean,
                            value: *const GLdouble);
        fn UniformMatrix3dv(location: GLint, count: GLsizei, transpose: GLboolean,
                            value: *const GLdouble);
        fn UniformMatrix4dv(location: GLint, count: GLsizei, transpose: GLboolean,
                            value: *const GLdouble);
        fn GetUniformdv(program: GLuint, location: GLint, params: *mut GLdouble);
        fn PatchParameteri(pname: GLenum, value: GLint);
        fn PatchParameterfv(pname: GLenum, values: *const GLfloat);
        fn BindTransformFeedback(target: GLenum, id: GLuint);
        fn DeleteTransformFeedbacks(n: GLsizei, ids: *const GLuint);
        fn GenTransformFeedbacks(n: GLsizei, ids: *mut GLuint);
        fn IsTransformFeedback(id: GLuint) -> GLboolean;
        fn PauseTransformFeedback();
        fn ResumeTransformFeedback();
        fn DrawTransformFeedback(mode: GLenum, id: GLuint);
        fn DrawTransformFeedbackStream(mode: GLenum, id: GLuint, stream: GLuint);
        fn BeginQueryIndexed(target: GLenum, index: GLuint, id: GLuint);
        fn EndQueryIndexed(target: GLenum, index: GLuint);
        fn GetQueryIndexediv(target: GLenum, index: GLuint, pname: GLenum, params: *mut GLint);
    }

    block v4_1 (4, 1) {
        fn ReleaseShaderCompiler();
        fn ShaderBinary(count: GLsizei, shaders: *const GLuint, binary_format: GLenum,
                        binary: *const c_void, length: GLsizei);
        fn GetShaderPrecisionFormat(shadertype: GLenum, precisiontype: GLenum,
                                    range: *mut GLint, precision: *mut GLint);
        fn DepthRangef(n: GLfloat, f: GLfloat);
        fn ClearDepthf(d: GLfloat);
        fn GetProgramBinary(program: GLuint, buf_size: GLsizei, length: *mut GLsizei,
                            binary_format: *mut GLenum, binary: *mut c_void);
        fn ProgramBinary(program: GLuint, binary_format: GLenum, binary: *const c_void,
                         length: GLsizei);
        fn ProgramParameteri(program: GLuint, pname: GLenum, value: GLint);
        fn UseProgramStages(pipeline: GLuint, stages: GLbitfield, program: GLuint);
        fn ActiveShaderProgram(pipeline: GLuint, program: GLuint);
        fn CreateShaderProgramv(type_: GLenum, count: GLsizei,
                                strings: *const *const GLchar) -> GLuint;
        fn BindProgramPipeline(pipeline: GLuint);
        fn DeleteProgramPipelines(n: GLsizei, pipelines: *const GLuint);
        fn GenProgramPipelines(n: GLsizei, pipelines: *mut GLuint);
        fn IsProgramPipeline(pipeline: GLuint) -> GLboolean;
        fn GetProgramPipelineiv(pipeline: GLuint, pname: GLenum, params: *mut GLint);
        fn ProgramUniform1i(program: GLuint, location: GLint, v0: GLint);
        fn ProgramUniform1f(program: GLuint, location: GLint, v0: GLfloat);
        fn ProgramUniform4f(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat,
                            v2: GLfloat, v3: GLfloat);
        fn ProgramUniformMatrix4fv(program: GLuint, location: GLint, count: GLsizei,
                                   transpose: GLboolean, value: *const GLfloat);
        fn ValidateProgramPipeline(pipeline: GLuint);
        fn GetProgramPipelineInfoLog(pipeline: GLuint, buf_size: GLsizei, length: *mut GLsizei,
                                     info_log: *mut GLchar);
        fn ViewportArrayv(first: GLuint, count: GLsizei, v: *const GLfloat);
        fn ViewportIndexedf(index: GLuint, x: GLfloat, y: GLfloat, w: GLfloat, h: GLfloat);
        fn ViewportIndexedfv(index: GLuint, v: *const GLfloat);
        fn ScissorArrayv(first: GLuint, count: GLsizei, v: *const GLint);
        fn ScissorIndexed(index: GLuint, left: GLint, bottom: GLint, width: GLsizei,
                          height: GLsizei);
        fn ScissorIndexedv(index: GLuint, v: *const GLint);
        fn DepthRangeArrayv(first: GLuint, count: GLsizei, v: *const GLdouble);
        fn DepthRangeIndexed(index: GLuint, n: GLdouble, f: GLdouble);
        fn GetFloati_v(target: GLenum, index: GLuint, data: *mut GLfloat);
        fn GetDoublei_v(target: GLenum, index: GLuint, data: *mut GLdouble);
    }

    block v4_2 (4, 2) {
        fn DrawArraysInstancedBaseInstance(mode: GLenum, first: GLint, count: GLsizei,
                                           instancecount: GLsizei, baseinstance: GLuint);
        fn DrawElementsInstancedBaseInstance(mode: GLenum, count: GLsizei, type_: GLenum,
                                             indices: *const c_void, instancecount: GLsizei,
                                             baseinstance: GLuint);
        fn DrawElementsInstancedBaseVertexBaseInstance(mode: GLenum, count: GLsizei,
                                                       type_: GLenum, indices: *const c_void,
                                                       instancecount: GLsizei,
                                                       basevertex: GLint, baseinstance: GLuint);
        fn GetInternalformativ(target: GLenum, internalformat: GLenum, pname: GLenum,
                               count: GLsizei, params: *mut GLint);
        fn GetActiveAtomicCounterBufferiv(program: GLuint, buffer_index: GLuint, pname: GLenum,
                                          params: *mut GLint);
        fn BindImageTexture(unit: GLuint, texture: GLuint, level: GLint, layered: GLboolean,
                            layer: GLint, access: GLenum, format: GLenum);
        fn MemoryBarrier(barriers: GLbitfield);
        fn TexStorage1D(target: GLenum, levels: GLsizei, internalformat: GLenum,
                        width: GLsizei);
        fn TexStorage2D(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei,
                        height: GLsizei);
        fn TexStorage3D(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei,
                        height: GLsizei, depth: GLsizei);
        fn DrawTransformFeedbackInstanced(mode: GLenum, id: GLuint, instancecount: GLsizei);
        fn DrawTransformFeedbackStreamInstanced(mode: GLenum, id: GLuint, stream: GLuint,
                                                instancecount: GLsizei);
    }

    block v4_3 (4, 3) {
        fn ClearBufferData(target: GLenum, internalformat: GLenum, format: GLenum,
                           type_: GLenum, data: *const c_void);
        fn ClearBufferSubData(target: GLenum, internalformat: GLenum, offset: GLintptr,
                              size: GLsizeiptr, format: GLenum, type_: GLenum,
                              data: *const c_void);
        fn DispatchCompute(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint);
        fn DispatchComputeIndirect(indirect: GLintptr);
        fn CopyImageSubData(src_name: GLuint, src_target: GLenum, src_level: GLint,
                            src_x: GLint, src_y: GLint, src_z: GLint, dst_name: GLuint,
                            dst_target: GLenum, dst_level: GLint, dst_x: GLint, dst_y: GLint,
                            dst_z: GLint, src_width: GLsizei, src_height: GLsizei,
                            src_depth: GLsizei);
        fn FramebufferParameteri(target: GLenum, pname: GLenum, param: GLint);
        fn GetFramebufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn GetInternalformati64v(target: GLenum, internalformat: GLenum, pname: GLenum,
                                 count: GLsizei, params: *mut GLint64);
        fn InvalidateTexSubImage(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
                                 zoffset: GLint, width: GLsizei, height: GLsizei,
                                 depth: GLsizei);
        fn InvalidateTexImage(texture: GLuint, level: GLint);
        fn InvalidateBufferSubData(buffer: GLuint, offset: GLintptr, length: GLsizeiptr);
        fn InvalidateBufferData(buffer: GLuint);
        fn InvalidateFramebuffer(target: GLenum, num_attachments: GLsizei,
                                 attachments: *const GLenum);
        fn InvalidateSubFramebuffer(target: GLenum, num_attachments: GLsizei,
                                    attachments: *const GLenum, x: GLint, y: GLint,
                                    width: GLsizei, height: GLsizei);
        fn MultiDrawArraysIndirect(mode: GLenum, indirect: *const c_void, drawcount: GLsizei,
                                   stride: GLsizei);
        fn MultiDrawElementsIndirect(mode: GLenum, type_: GLenum, indirect: *const c_void,
                                     drawcount: GLsizei, stride: GLsizei);
        fn GetProgramInterfaceiv(program: GLuint, program_interface: GLenum, pname: GLenum,
                                 params: *mut GLint);
        fn GetProgramResourceIndex(program: GLuint, program_interface: GLenum,
                                   name: *const GLchar) -> GLuint;
        fn GetProgramResourceName(program: GLuint, program_interface: GLenum, index: GLuint,
                                  buf_size: GLsizei, length: *mut GLsizei, name: *mut GLchar);
        fn GetProgramResourceiv(program: GLuint, program_interface: GLenum, index: GLuint,
                                prop_count: GLsizei, props: *const GLenum, count: GLsizei,
                                length: *mut GLsizei, params: *mut GLint);
        fn GetProgramResourceLocation(program: GLuint, program_interface: GLenum,
                                      name: *const GLchar) -> GLint;
        fn GetProgramResourceLocationIndex(program: GLuint, program_interface: GLenum,
                                           name: *const GLchar) -> GLint;
        fn ShaderStorageBlockBinding(program: GLuint, storage_block_index: GLuint,
                                     storage_block_binding: GLuint);
        fn TexBufferRange(target: GLenum, internalformat: GLenum, buffer: GLuint,
                          offset: GLintptr, size: GLsizeiptr);
        fn TexStorage2DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum,
                                   width: GLsizei, height: GLsizei,
                                   fixedsamplelocations: GLboolean);
        fn TexStorage3DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum,
                                   width: GLsizei, height: GLsizei, depth: GLsizei,
                                   fixedsamplelocations: GLboolean);
        fn TextureView(texture: GLuint, target: GLenum, origtexture: GLuint,
                       internalformat: GLenum, minlevel: GLuint, numlevels: GLuint,
                       minlayer: GLuint, numlayers: GLuint);
        fn BindVertexBuffer(bindingindex: GLuint, buffer: GLuint, offset: GLintptr,
                            stride: GLsizei);
        fn VertexAttribFormat(attribindex: GLuint, size: GLint, type_: GLenum,
                              normalized: GLboolean, relativeoffset: GLuint);
        fn VertexAttribIFormat(attribindex: GLuint, size: GLint, type_: GLenum,
                               relativeoffset: GLuint);
        fn VertexAttribLFormat(attribindex: GLuint, size: GLint, type_: GLenum,
                               relativeoffset: GLuint);
        fn VertexAttribBinding(attribindex: GLuint, bindingindex: GLuint);
        fn VertexBindingDivisor(bindingindex: GLuint, divisor: GLuint);
        fn DebugMessageControl(source: GLenum, type_: GLenum, severity: GLenum, count: GLsizei,
                               ids: *const GLuint, enabled: GLboolean);
        fn DebugMessageInsert(source: GLenum, type_: GLenum, id: GLuint, severity: GLenum,
                              length: GLsizei, buf: *const GLchar);
        fn DebugMessageCallback(callback: GLDEBUGPROC, user_param: *const c_void);
        fn GetDebugMessageLog(count: GLuint, buf_size: GLsizei, sources: *mut GLenum,
                              types: *mut GLenum, ids: *mut GLuint, severities: *mut GLenum,
                              lengths: *mut GLsizei, message_log: *mut GLchar) -> GLuint;
        fn PushDebugGroup(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar);
        fn PopDebugGroup();
        fn ObjectLabel(identifier: GLenum, name: GLuint, length: GLsizei,
                       label: *const GLchar);
        fn GetObjectLabel(identifier: GLenum, name: GLuint, buf_size: GLsizei,
                          length: *mut GLsizei, label: *mut GLchar);
        fn ObjectPtrLabel(ptr: *const c_void, length: GLsizei, label: *const GLchar);
        fn GetObjectPtrLabel(ptr: *const c_void, buf_size: GLsizei, length: *mut GLsizei,
                             label: *mut GLchar);
    }

    block v4_4 (4, 4) {
        fn BufferStorage(target: GLenum, size: GLsizeiptr, data: *const c_void,
                         flags: GLbitfield);
        fn ClearTexImage(texture: GLuint, level: GLint, format: GLenum, type_: GLenum,
                         data: *const c_void);
        fn ClearTexSubImage(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
                            zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei,
                            format: GLenum, type_: GLenum, data: *const c_void);
        fn BindBuffersBase(target: GLenum, first: GLuint, count: GLsizei,
                           buffers: *const GLuint);
        fn BindBuffersRange(target: GLenum, first: GLuint, count: GLsizei,
                            buffers: *const GLuint, offsets: *const GLintptr,
                            sizes: *const GLsizeiptr);
        fn BindTextures(first: GLuint, count: GLsizei, textures: *const GLuint);
        fn BindSamplers(first: GLuint, count: GLsizei, samplers: *const GLuint);
        fn BindImageTextures(first: GLuint, count: GLsizei, textures: *const GLuint);
        fn BindVertexBuffers(first: GLuint, count: GLsizei, buffers: *const GLuint,
                             offsets: *const GLintptr, strides: *const GLsizei);
    }

    block v4_5 (4, 5) {
        fn ClipControl(origin: GLenum, depth: GLenum);
        fn CreateTransformFeedbacks(n: GLsizei, ids: *mut GLuint);
        fn TransformFeedbackBufferBase(xfb: GLuint, index: GLuint, buffer: GLuint);
        fn TransformFeedbackBufferRange(xfb: GLuint, index: GLuint, buffer: GLuint,
                                        offset: GLintptr, size: GLsizeiptr);
        fn CreateBuffers(n: GLsizei, buffers: *mut GLuint);
        fn NamedBufferStorage(buffer: GLuint, size: GLsizeiptr, data: *const c_void,
                              flags: GLbitfield);
        fn NamedBufferData(buffer: GLuint, size: GLsizeiptr, data: *const c_void,
                           usage: GLenum);
        fn NamedBufferSubData(buffer: GLuint, offset: GLintptr, size: GLsizeiptr,
                              data: *const c_void);
        fn CopyNamedBufferSubData(read_buffer: GLuint, write_buffer: GLuint,
                                  read_offset: GLintptr, write_offset: GLintptr,
                                  size: GLsizeiptr);
        fn MapNamedBuffer(buffer: GLuint, access: GLenum) -> *mut c_void;
        fn MapNamedBufferRange(buffer: GLuint, offset: GLintptr, length: GLsizeiptr,
                               access: GLbitfield) -> *mut c_void;
        fn UnmapNamedBuffer(buffer: GLuint) -> GLboolean;
        fn CreateFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
        fn NamedFramebufferRenderbuffer(framebuffer: GLuint, attachment: GLenum,
                                        renderbuffertarget: GLenum, renderbuffer: GLuint);
        fn NamedFramebufferTexture(framebuffer: GLuint, attachment: GLenum, texture: GLuint,
                                   level: GLint);
        fn NamedFramebufferDrawBuffer(framebuffer: GLuint, buf: GLenum);
        fn NamedFramebufferDrawBuffers(framebuffer: GLuint, n: GLsizei, bufs: *const GLenum);
        fn NamedFramebufferReadBuffer(framebuffer: GLuint, src: GLenum);
        fn ClearNamedFramebufferiv(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint,
                                   value: *const GLint);
        fn ClearNamedFramebufferuiv(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint,
                                    value: *const GLuint);
        fn ClearNamedFramebufferfv(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint,
                                   value: *const GLfloat);
        fn ClearNamedFramebufferfi(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint,
                                   depth: GLfloat, stencil: GLint);
        fn BlitNamedFramebuffer(read_framebuffer: GLuint, draw_framebuffer: GLuint,
                                src_x0: GLint, src_y0: GLint, src_x1: GLint, src_y1: GLint,
                                dst_x0: GLint, dst_y0: GLint, dst_x1: GLint, dst_y1: GLint,
                                mask: GLbitfield, filter: GLenum);
        fn CheckNamedFramebufferStatus(framebuffer: GLuint, target: GLenum) -> GLenum;
        fn CreateRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint);
        fn NamedRenderbufferStorage(renderbuffer: GLuint, internalformat: GLenum,
                                    width: GLsizei, height: GLsizei);
        fn NamedRenderbufferStorageMultisample(renderbuffer: GLuint, samples: GLsizei,
                                               internalformat: GLenum, width: GLsizei,
                                               height: GLsizei);
        fn CreateTextures(target: GLenum, n: GLsizei, textures: *mut GLuint);
        fn TextureBuffer(texture: GLuint, internalformat: GLenum, buffer: GLuint);
        fn TextureStorage2D(texture: GLuint, levels: GLsizei, internalformat: GLenum,
                            width: GLsizei, height: GLsizei);
        fn TextureStorage3D(texture: GLuint, levels: GLsizei, internalformat: GLenum,
                            width: GLsizei, height: GLsizei, depth: GLsizei);
        fn TextureSubImage2D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
                             width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum,
                             pixels: *const c_void);
        fn TextureSubImage3D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
                             zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei,
                             format: GLenum, type_: GLenum, pixels: *const c_void);
        fn BindTextureUnit(unit: GLuint, texture: GLuint);
        fn GenerateTextureMipmap(texture: GLuint);
        fn TextureParameteri(texture: GLuint, pname: GLenum, param: GLint);
        fn TextureParameterf(texture: GLuint, pname: GLenum, param: GLfloat);
        fn CreateVertexArrays(n: GLsizei, arrays: *mut GLuint);
        fn EnableVertexArrayAttrib(vaobj: GLuint, index: GLuint);
        fn DisableVertexArrayAttrib(vaobj: GLuint, index: GLuint);
        fn VertexArrayElementBuffer(vaobj: GLuint, buffer: GLuint);
        fn VertexArrayVertexBuffer(vaobj: GLuint, bindingindex: GLuint, buffer: GLuint,
                                   offset: GLintptr, stride: GLsizei);
        fn VertexArrayAttribFormat(vaobj: GLuint, attribindex: GLuint, size: GLint,
                                   type_: GLenum, normalized: GLboolean,
                                   relativeoffset: GLuint);
        fn VertexArrayAttribBinding(vaobj: GLuint, attribindex: GLuint, bindingindex: GLuint);
        fn CreateSamplers(n: GLsizei, samplers: *mut GLuint);
        fn CreateProgramPipelines(n: GLsizei, pipelines: *mut GLuint);
        fn CreateQueries(target: GLenum, n: GLsizei, ids: *mut GLuint);
        fn MemoryBarrierByRegion(barriers: GLbitfield);
        fn GetGraphicsResetStatus() -> GLenum;
        fn ReadnPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum,
                       type_: GLenum, buf_size: GLsizei, data: *mut c_void);
        fn GetnUniformfv(program: GLuint, location: GLint, buf_size: GLsizei,
                         params: *mut GLfloat);
        fn GetnUniformiv(program: GLuint, location: GLint, buf_size: GLsizei,
                         params: *mut GLint);
        fn GetnUniformuiv(program: GLuint, location: GLint, buf_size: GLsizei,
                          params: *mut GLuint);
        fn TextureBarrier();
    }

    block v4_6 (4, 6) {
        fn SpecializeShader(shader: GLuint, entry_point: *const GLchar,
                            num_specialization_constants: GLuint,
                            constant_index: *const GLuint, constant_value: *const GLuint);
        fn MultiDrawArraysIndirectCount(mode: GLenum, indirect: *const c_void,
                                        drawcount: GLintptr, maxdrawcount: GLsizei,
                                        stride: GLsizei);
        fn MultiDrawElementsIndirectCount(mode: GLenum, type_: GLenum, indirect: *const c_void,
                                          drawcount: GLintptr, maxdrawcount: GLsizei,
                                          stride: GLsizei);
        fn PolygonOffsetClamp(factor: GLfloat, units: GLfloat, clamp: GLfloat);
    }
}
