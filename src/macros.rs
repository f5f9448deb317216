/*
Copyright (c) 2020 Todd Stellanova
LICENSE: See LICENSE file
*/

// Tracing goes out over semihosting only when the `semihosting` feature is on;
// a semihosting call with no debugger attached faults the core.

#[macro_export]
#[cfg(all(debug_assertions, feature = "semihosting", not(test)))]
macro_rules! debug_println {
    ($($arg:tt)*) => ({
        use cortex_m_semihosting::hprintln;
        let _ = hprintln!($($arg)*);
    });
}

#[macro_export]
#[cfg(not(all(debug_assertions, feature = "semihosting", not(test))))]
macro_rules! debug_println {
    ($($tt:tt)*) => {{}};
}
