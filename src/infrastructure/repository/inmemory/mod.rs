mod board;

pub use board::InMemoryBoardRepository;
