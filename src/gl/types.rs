// glload/src/gl/types.rs
//
//! The Khronos GL type aliases, matching `gl.h` bit-for-bit.

#![allow(non_camel_case_types, dead_code)]

use std::os::raw::c_void;

pub type GLboolean = u8;
pub type GLbyte = i8;
pub type GLubyte = u8;
pub type GLchar = i8;
pub type GLshort = i16;
pub type GLushort = u16;
pub type GLint = i32;
pub type GLuint = u32;
pub type GLint64 = i64;
pub type GLuint64 = u64;
pub type GLsizei = i32;
pub type GLenum = u32;
pub type GLbitfield = u32;
pub type GLfloat = f32;
pub type GLclampf = f32;
pub type GLdouble = f64;
pub type GLclampd = f64;
pub type GLintptr = isize;
pub type GLsizeiptr = isize;
pub type GLsync = *const c_void;

pub type GLDEBUGPROC = Option<
    unsafe extern "system" fn(
        source: GLenum,
        gltype: GLenum,
        id: GLuint,
        severity: GLenum,
        length: GLsizei,
        message: *const GLchar,
        user_param: *mut c_void,
    ),
>;
