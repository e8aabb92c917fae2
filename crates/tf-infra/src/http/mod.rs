pub mod tmpfile_transport;

pub use tmpfile_transport::ReqwestUploadTransport;
