mod mock_ntopng;

pub use mock_ntopng::*;
