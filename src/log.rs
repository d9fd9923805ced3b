#[cfg(feature = "tracing")]
pub(crate) use tracing::trace as scanpat_trace;

#[cfg(all(feature = "log", not(feature = "tracing")))]
pub(crate) use log::trace as scanpat_trace;

#[cfg(not(any(feature = "log", feature = "tracing")))]
#[macro_use]
pub(crate) mod inner_log {
    #[macro_export]
    macro_rules! scanpat_trace {
        ($($arg:tt)*) => {
            ();
        };
    }
}

macro_rules! trace_exec {
    ($name:literal, $beg:expr, $ret:expr) => {{
        let ret = $ret;
        $crate::scanpat_trace!("{} beg = {} -> {:?}", $name, $beg, ret.is_ok());
        ret
    }};
}

macro_rules! trace_read {
    ($beg:expr, $cp:expr) => {{
        let cp = $cp;
        $crate::scanpat_trace!("read at {} -> {}", $beg, cp);
        cp
    }};
}

pub(crate) use trace_exec;
pub(crate) use trace_read;
