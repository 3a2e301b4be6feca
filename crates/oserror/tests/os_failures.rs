//! Real failures from the platform I/O layer, classified without any
//! help from the code that raised them.

use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

use nix::sys::signal::kill;
use nix::unistd::Pid;
use oserror::{belongs_to, match_kind, most_specific_kind, ErrorKind, ResultExt};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("oserror-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn file_not_found() {
    let err = fs::File::open("/definitely/not/here.txt").unwrap_err();
    assert_eq!(most_specific_kind(&err), Some(ErrorKind::FileNotFound));
    assert!(!belongs_to(&err, ErrorKind::Connection));
}

#[test]
fn file_exists() {
    let dir = scratch_dir("exists");
    let err = fs::create_dir(&dir).unwrap_err();
    assert_eq!(most_specific_kind(&err), Some(ErrorKind::FileExists));

    // The mkdir -p idiom.
    assert!(fs::create_dir(&dir).ignore_kind(ErrorKind::FileExists).unwrap().is_none());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn not_a_directory() {
    let dir = scratch_dir("notdir");
    let file = dir.join("plain");
    fs::write(&file, b"x").unwrap();
    let err = fs::File::open(file.join("child")).unwrap_err();
    assert_eq!(most_specific_kind(&err), Some(ErrorKind::NotADirectory));
    fs::remove_dir_all(&dir).unwrap();
}

#[cfg(target_os = "linux")]
#[test]
fn is_a_directory() {
    let dir = scratch_dir("isdir");
    let err = fs::read(&dir).unwrap_err();
    assert_eq!(most_specific_kind(&err), Some(ErrorKind::IsADirectory));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn broken_pipe_is_a_connection_error() {
    let (mut left, right) = UnixStream::pair().unwrap();
    drop(right);
    let err = left.write_all(b"x").unwrap_err();
    assert_eq!(most_specific_kind(&err), Some(ErrorKind::BrokenPipe));
    assert!(belongs_to(&err, ErrorKind::Connection));

    let handled = match_kind!(err, {
        Connection => "connection",
        _ => "other",
    });
    assert_eq!(handled, "connection");
}

#[test]
fn connection_refused() {
    // Find a free port, then release it so nothing is listening.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let err = TcpStream::connect(addr).unwrap_err();
    assert_eq!(most_specific_kind(&err), Some(ErrorKind::ConnectionRefused));
    assert!(belongs_to(&err, ErrorKind::Connection));
}

#[test]
fn blocking_io() {
    let (mut left, _right) = UnixStream::pair().unwrap();
    left.set_nonblocking(true).unwrap();
    let mut buf = [0u8; 1];
    let err = left.read(&mut buf).unwrap_err();
    assert_eq!(most_specific_kind(&err), Some(ErrorKind::BlockingIO));
}

#[test]
fn process_lookup() {
    // Far above any pid_max the kernel hands out.
    let err = kill(Pid::from_raw(i32::MAX), None).unwrap_err();
    assert_eq!(most_specific_kind(&err), Some(ErrorKind::ProcessLookup));
}

#[test]
fn generic_failure_is_left_alone() {
    let err = std::io::Error::new(std::io::ErrorKind::Other, "not an OS failure");
    assert_eq!(most_specific_kind(&err), None);
    for kind in ErrorKind::ALL {
        assert!(!belongs_to(&err, kind));
    }
    assert_eq!(err.to_string(), "not an OS failure");
}
