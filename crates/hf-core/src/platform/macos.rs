//! macOS counters via sysctl.

/// Seconds since boot, from `kern.boottime`.
pub fn uptime_seconds() -> Option<u64> {
    let mut boottime = libc::timeval {
        tv_sec: 0,
        tv_usec: 0,
    };
    let mut len = std::mem::size_of::<libc::timeval>();
    let mut mib = [libc::CTL_KERN, libc::KERN_BOOTTIME];
    let rc = unsafe {
        libc::sysctl(
            mib.as_mut_ptr(),
            mib.len() as libc::c_uint,
            &mut boottime as *mut _ as *mut libc::c_void,
            &mut len,
            std::ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return None;
    }
    let now = unsafe { libc::time(std::ptr::null_mut()) };
    if now <= boottime.tv_sec {
        return None;
    }
    Some((now - boottime.tv_sec) as u64)
}

/// Physical memory size from `hw.memsize`.
pub fn total_memory_bytes() -> Option<u64> {
    let mut value: u64 = 0;
    let mut len = std::mem::size_of::<u64>();
    let rc = unsafe {
        libc::sysctlbyname(
            c"hw.memsize".as_ptr(),
            &mut value as *mut _ as *mut libc::c_void,
            &mut len,
            std::ptr::null_mut(),
            0,
        )
    };
    (rc == 0 && value > 0).then_some(value)
}

/// CPU brand string from `machdep.cpu.brand_string`.
pub fn cpu_brand() -> Option<String> {
    let mut buf = [0u8; 128];
    let mut len = buf.len();
    let rc = unsafe {
        libc::sysctlbyname(
            c"machdep.cpu.brand_string".as_ptr(),
            buf.as_mut_ptr() as *mut libc::c_void,
            &mut len,
            std::ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return None;
    }
    let bytes: Vec<u8> = buf.iter().take_while(|&&b| b != 0).copied().collect();
    let brand = String::from_utf8_lossy(&bytes).trim().to_string();
    (!brand.is_empty()).then_some(brand)
}
