mod board;

pub use board::JsonFileBoardRepository;
