use clap::ValueEnum;
use dbcodec_core::{Endianness, RawDataCodec};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum EndianArg {
    Little,
    Big,
}

impl EndianArg {
    pub fn codec(self) -> RawDataCodec {
        RawDataCodec::new(match self {
            EndianArg::Little => Endianness::Little,
            EndianArg::Big => Endianness::Big,
        })
    }
}
