#[path = "util/cores.rs"]
mod cores;
#[path = "util/file_list.rs"]
mod file_list;
#[path = "util/file_size.rs"]
mod file_size;
