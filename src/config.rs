// config.rs: Compile-time defaults for the codec and the command-line tool.
//
// Every value here can be overridden at runtime, either through `Prefs`
// setters, the `-W/-B/--stage-size/-T` flags, or the `LZ77_WINDOW` /
// `LZ77_NBWORKERS` environment variables.

// Size of the encoder's token staging buffer, and of each chunk of tokens
// the decoder reads at a time.
pub const COMPRESSED_BUFFER_SIZE: usize = 2 * 1024;

// Size of each chunk of raw input the encoder reads, and of the decoder's
// output staging buffer.
pub const DECOMPRESSED_BUFFER_SIZE: usize = 4 * 1024;

// Default sliding-window size.  Matches never reach further back than this,
// and the decoder keeps exactly this many bytes of history.
pub const WINDOW_SIZE: usize = 16 * 1024;

// Default number of files processed concurrently in multi-file mode.
// 0 = one worker per physical core.
pub const NB_WORKERS_DEFAULT: usize = 0;

// Upper bound for `-T#` / `LZ77_NBWORKERS`.
pub const NB_WORKERS_MAX: usize = 200;

// Environment variable names consulted by the CLI.
pub const ENV_WINDOW: &str = "LZ77_WINDOW";
pub const ENV_NBWORKERS: &str = "LZ77_NBWORKERS";
