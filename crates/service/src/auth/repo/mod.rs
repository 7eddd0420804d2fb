pub mod seaorm;

pub use seaorm::SeaOrmUsuarioRepository;
