// Create a hidden window against the real SDL2 library, with every call going
// through the checked adapter and teardown handled by Drop.
//
// Needs SDL2 installed:
//   cargo run -p sdlsafe --example checked-window --features link

#![allow(non_snake_case)]

use std::ffi::{c_char, c_int};

use sdlsafe::{Window, fail, install_linked, route_sdl_logs, sdl_call};
use sdlsafe_ffi::SDL_Window;

#[link(name = "SDL2")]
unsafe extern "C" {
    fn SDL_Init(flags: u32) -> c_int;
    fn SDL_Quit();
    fn SDL_CreateWindow(
        title: *const c_char,
        x: c_int,
        y: c_int,
        w: c_int,
        h: c_int,
        flags: u32,
    ) -> *mut SDL_Window;
    fn SDL_GetWindowID(window: *mut SDL_Window) -> u32;
}

const SDL_INIT_VIDEO: u32 = 0x0000_0020;
const SDL_WINDOW_HIDDEN: u32 = 0x0000_0008;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    install_linked()?;
    route_sdl_logs()?;

    sdl_call("SDL_Init", fail::on_negative, || unsafe {
        SDL_Init(SDL_INIT_VIDEO)
    })?;

    let raw = sdl_call("SDL_CreateWindow", fail::on_null, || unsafe {
        SDL_CreateWindow(c"sdlsafe".as_ptr(), 0, 0, 1, 1, SDL_WINDOW_HIDDEN)
    })?;
    let window = unsafe { Window::from_raw(raw) }.ok_or("adopted a null window")?;

    let id = sdl_call("SDL_GetWindowID", fail::on_zero, || unsafe {
        SDL_GetWindowID(window.as_ptr())
    })?;
    println!("created hidden window, id {id}");

    drop(window);
    unsafe { SDL_Quit() };
    Ok(())
}
