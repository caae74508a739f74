//! `cosmos.tx.signing.v1beta1` signature descriptors.

use serde_json::Value;

use self::signature_descriptor::{Data, DataPartial};
use crate::codec::{Fields, JsonObject, Message};
use crate::error::Result;
use crate::proto_enum;
use crate::types::google::{Any, AnyPartial};
use crate::wire::{Reader, WireType, Writer};

proto_enum! {
    /// How the signed bytes were produced.
    pub enum SignMode {
        Unspecified = 0 => "SIGN_MODE_UNSPECIFIED",
        Direct = 1 => "SIGN_MODE_DIRECT",
        Textual = 2 => "SIGN_MODE_TEXTUAL",
        LegacyAminoJson = 127 => "SIGN_MODE_LEGACY_AMINO_JSON",
        Eip191 = 191 => "SIGN_MODE_EIP_191",
    }
}

/// A list of signature descriptors, as exported by tooling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureDescriptors {
    pub signatures: Vec<SignatureDescriptor>,
}

/// [`SignatureDescriptors`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureDescriptorsPartial {
    pub signatures: Vec<SignatureDescriptorPartial>,
}

impl Message for SignatureDescriptors {
    type Partial = SignatureDescriptorsPartial;

    fn encode_raw(&self, w: &mut Writer) {
        for signature in &self.signatures {
            w.message(1, signature);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.signatures.push(r.message(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("SignatureDescriptors", value)?;
        Ok(Self {
            signatures: f.repeated_message("signatures")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .repeated_message("signatures", &self.signatures)
            .build()
    }

    fn from_partial(p: SignatureDescriptorsPartial) -> Self {
        Self {
            signatures: p
                .signatures
                .into_iter()
                .map(SignatureDescriptor::from_partial)
                .collect(),
        }
    }
}

/// A signature together with the key and sequence it was made with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureDescriptor {
    pub public_key: Option<Any>,
    pub data: Option<Data>,
    pub sequence: u64,
}

/// [`SignatureDescriptor`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureDescriptorPartial {
    pub public_key: Option<AnyPartial>,
    pub data: Option<DataPartial>,
    pub sequence: Option<u64>,
}

impl Message for SignatureDescriptor {
    type Partial = SignatureDescriptorPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if let Some(public_key) = &self.public_key {
            w.message(1, public_key);
        }
        if let Some(data) = &self.data {
            w.message(2, data);
        }
        if self.sequence != 0 {
            w.uint64(3, self.sequence);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.public_key = Some(r.message(field, wt)?),
            2 => self.data = Some(r.message(field, wt)?),
            3 => self.sequence = r.uint64(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("SignatureDescriptor", value)?;
        Ok(Self {
            public_key: f.message("publicKey")?,
            data: f.message("data")?,
            sequence: f.uint64("sequence")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .message("publicKey", self.public_key.as_ref())
            .message("data", self.data.as_ref())
            .uint64("sequence", self.sequence)
            .build()
    }

    fn from_partial(p: SignatureDescriptorPartial) -> Self {
        Self {
            public_key: p.public_key.map(Any::from_partial),
            data: p.data.map(Data::from_partial),
            sequence: p.sequence.unwrap_or_default(),
        }
    }
}

/// Nested types of [`SignatureDescriptor`].
pub mod signature_descriptor {
    use serde_json::Value;

    use self::data::{Multi, Single, Sum, SumPartial};
    use crate::codec::{Fields, JsonObject, Message};
    use crate::error::Result;
    use crate::wire::{Reader, WireType, Writer};

    /// Signature payload: one signer or a multisig tree.
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub struct Data {
        pub sum: Option<Sum>,
    }

    /// [`Data`] with every field optional.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct DataPartial {
        pub sum: Option<SumPartial>,
    }

    impl Message for Data {
        type Partial = DataPartial;

        fn encode_raw(&self, w: &mut Writer) {
            match &self.sum {
                Some(Sum::Single(single)) => w.message(1, single),
                Some(Sum::Multi(multi)) => w.message(2, multi),
                None => {}
            }
        }

        fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
            match field {
                1 => self.sum = Some(Sum::Single(r.message(field, wt)?)),
                2 => self.sum = Some(Sum::Multi(r.message(field, wt)?)),
                _ => r.skip_field(field, wt)?,
            }
            Ok(())
        }

        fn from_json(value: &Value) -> Result<Self> {
            let f = Fields::new("SignatureDescriptor.Data", value)?;
            // Both keys set: the later field wins, as it does on the wire.
            let sum = match f.message("multi")? {
                Some(multi) => Some(Sum::Multi(multi)),
                None => f.message("single")?.map(Sum::Single),
            };
            Ok(Self { sum })
        }

        fn to_json(&self) -> Value {
            let mut obj = JsonObject::new();
            match &self.sum {
                Some(Sum::Single(single)) => obj.message("single", Some(single)),
                Some(Sum::Multi(multi)) => obj.message("multi", Some(multi)),
                None => &mut obj,
            };
            obj.build()
        }

        fn from_partial(p: DataPartial) -> Self {
            let sum = p.sum.map(|sum| match sum {
                SumPartial::Single(single) => Sum::Single(Single::from_partial(single)),
                SumPartial::Multi(multi) => Sum::Multi(Multi::from_partial(multi)),
            });
            Self { sum }
        }
    }

    /// Nested types of [`Data`].
    pub mod data {
        use serde_json::Value;

        use super::{Data, DataPartial};
        use crate::codec::{Enumeration, Fields, JsonObject, Message};
        use crate::error::Result;
        use crate::types::cosmos::crypto::{CompactBitArray, CompactBitArrayPartial};
        use crate::types::cosmos::signing::SignMode;
        use crate::wire::{Reader, WireType, Writer};

        /// Which variant of [`Data`] is set.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Sum {
            Single(Single),
            Multi(Multi),
        }

        /// Partial form of [`Sum`]; the chosen variant holds a partial record.
        #[derive(Debug, Clone, PartialEq)]
        pub enum SumPartial {
            Single(SinglePartial),
            Multi(MultiPartial),
        }

        /// A signature from a single key.
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        pub struct Single {
            pub mode: SignMode,
            pub signature: Vec<u8>,
        }

        /// [`Single`] with every field optional.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct SinglePartial {
            pub mode: Option<SignMode>,
            pub signature: Option<Vec<u8>>,
        }

        impl Message for Single {
            type Partial = SinglePartial;

            fn encode_raw(&self, w: &mut Writer) {
                if !self.mode.is_default() {
                    w.enumeration(1, self.mode);
                }
                if !self.signature.is_empty() {
                    w.bytes(2, &self.signature);
                }
            }

            fn merge_field(
                &mut self,
                field: u32,
                wt: WireType,
                r: &mut Reader<'_>,
            ) -> Result<()> {
                match field {
                    1 => self.mode = r.enumeration(field, wt)?,
                    2 => self.signature = r.bytes(field, wt)?,
                    _ => r.skip_field(field, wt)?,
                }
                Ok(())
            }

            fn from_json(value: &Value) -> Result<Self> {
                let f = Fields::new("SignatureDescriptor.Data.Single", value)?;
                Ok(Self {
                    mode: f.enumeration("mode"),
                    signature: f.bytes("signature")?,
                })
            }

            fn to_json(&self) -> Value {
                JsonObject::new()
                    .enumeration("mode", self.mode)
                    .bytes("signature", &self.signature)
                    .build()
            }

            fn from_partial(p: SinglePartial) -> Self {
                Self {
                    mode: p.mode.unwrap_or_default(),
                    signature: p.signature.unwrap_or_default(),
                }
            }
        }

        /// Signatures from a multisig key, one per set bit.
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        pub struct Multi {
            pub bitarray: Option<CompactBitArray>,
            pub signatures: Vec<Data>,
        }

        /// [`Multi`] with every field optional.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct MultiPartial {
            pub bitarray: Option<CompactBitArrayPartial>,
            pub signatures: Vec<DataPartial>,
        }

        impl Message for Multi {
            type Partial = MultiPartial;

            fn encode_raw(&self, w: &mut Writer) {
                if let Some(bitarray) = &self.bitarray {
                    w.message(1, bitarray);
                }
                for signature in &self.signatures {
                    w.message(2, signature);
                }
            }

            fn merge_field(
                &mut self,
                field: u32,
                wt: WireType,
                r: &mut Reader<'_>,
            ) -> Result<()> {
                match field {
                    1 => self.bitarray = Some(r.message(field, wt)?),
                    2 => self.signatures.push(r.message(field, wt)?),
                    _ => r.skip_field(field, wt)?,
                }
                Ok(())
            }

            fn from_json(value: &Value) -> Result<Self> {
                let f = Fields::new("SignatureDescriptor.Data.Multi", value)?;
                Ok(Self {
                    bitarray: f.message("bitarray")?,
                    signatures: f.repeated_message("signatures")?,
                })
            }

            fn to_json(&self) -> Value {
                JsonObject::new()
                    .message("bitarray", self.bitarray.as_ref())
                    .repeated_message("signatures", &self.signatures)
                    .build()
            }

            fn from_partial(p: MultiPartial) -> Self {
                Self {
                    bitarray: p.bitarray.map(CompactBitArray::from_partial),
                    signatures: p.signatures.into_iter().map(Data::from_partial).collect(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::signature_descriptor::data::{
        Multi, MultiPartial, Single, SinglePartial, Sum, SumPartial,
    };
    use super::*;
    use crate::codec::Enumeration;
    use crate::types::cosmos::crypto::{CompactBitArray, CompactBitArrayPartial};
    use crate::wire::Writer;
    use serde_json::json;

    fn single(byte: u8) -> Data {
        Data {
            sum: Some(Sum::Single(Single {
                mode: SignMode::Direct,
                signature: vec![byte; 4],
            })),
        }
    }

    fn multisig() -> SignatureDescriptor {
        SignatureDescriptor {
            public_key: Some(Any {
                type_url: "/cosmos.crypto.multisig.LegacyAminoPubKey".to_string(),
                value: vec![1, 2, 3],
            }),
            data: Some(Data {
                sum: Some(Sum::Multi(Multi {
                    bitarray: Some(CompactBitArray {
                        extra_bits_stored: 3,
                        elems: vec![0b1010_0000],
                    }),
                    signatures: vec![single(0xAA), single(0xBB)],
                })),
            }),
            sequence: 7,
        }
    }

    #[test]
    fn test_sign_mode_large_ordinals() {
        assert_eq!(SignMode::from_i32(191), SignMode::Eip191);
        assert_eq!(SignMode::LegacyAminoJson.as_str_name(), "SIGN_MODE_LEGACY_AMINO_JSON");
        assert_eq!(SignMode::from_str_name("SIGN_MODE_TEXTUAL"), SignMode::Textual);
    }

    #[test]
    fn test_oneof_single_bytes() {
        // field 1 { mode: DIRECT, signature: [0x01] }
        let data = Data {
            sum: Some(Sum::Single(Single {
                mode: SignMode::Direct,
                signature: vec![0x01],
            })),
        };
        assert_eq!(
            &data.encode()[..],
            &[0x0A, 0x05, 0x08, 0x01, 0x12, 0x01, 0x01]
        );
    }

    #[test]
    fn test_oneof_default_variant_still_written() {
        let data = Data {
            sum: Some(Sum::Single(Single::default())),
        };
        assert_eq!(&data.encode()[..], &[0x0A, 0x00]);
        assert_eq!(Data::decode(&data.encode()).unwrap(), data);
    }

    #[test]
    fn test_recursive_multisig_round_trip() {
        let descriptor = multisig();
        assert_eq!(
            SignatureDescriptor::decode(&descriptor.encode()).unwrap(),
            descriptor
        );
        assert_eq!(
            SignatureDescriptor::from_json(&descriptor.to_json()).unwrap(),
            descriptor
        );
    }

    #[test]
    fn test_oneof_last_field_wins_on_wire() {
        let mut bytes = single(0x01).encode_to_vec();
        bytes.extend_from_slice(&Data {
            sum: Some(Sum::Multi(Multi::default())),
        }
        .encode());
        let data = Data::decode(&bytes).unwrap();
        assert!(matches!(data.sum, Some(Sum::Multi(_))));
    }

    #[test]
    fn test_oneof_json() {
        let json = single(0xFF).to_json();
        assert_eq!(
            json,
            json!({"single": {"mode": "SIGN_MODE_DIRECT", "signature": "/////w=="}})
        );
        assert_eq!(Data::from_json(&json!({})).unwrap().sum, None);
    }

    #[test]
    fn test_descriptors_wrapper() {
        let all = SignatureDescriptors {
            signatures: vec![multisig(), SignatureDescriptor::default()],
        };
        let decoded = SignatureDescriptors::decode(&all.encode()).unwrap();
        assert_eq!(decoded, all);
        assert_eq!(
            SignatureDescriptors::default().to_json(),
            json!({"signatures": []})
        );
    }

    #[test]
    fn test_partial_fills_oneof_variants() {
        let partial = SignatureDescriptorPartial {
            data: Some(DataPartial {
                sum: Some(SumPartial::Multi(MultiPartial {
                    bitarray: Some(CompactBitArrayPartial {
                        extra_bits_stored: Some(1),
                        ..Default::default()
                    }),
                    signatures: vec![
                        DataPartial {
                            sum: Some(SumPartial::Single(SinglePartial {
                                mode: Some(SignMode::Direct),
                                ..Default::default()
                            })),
                        },
                        DataPartial::default(),
                    ],
                })),
            }),
            ..Default::default()
        };

        let descriptor = SignatureDescriptor::from_partial(partial);
        assert_eq!(
            descriptor.data,
            Some(Data {
                sum: Some(Sum::Multi(Multi {
                    bitarray: Some(CompactBitArray {
                        extra_bits_stored: 1,
                        elems: vec![],
                    }),
                    signatures: vec![
                        Data {
                            sum: Some(Sum::Single(Single {
                                mode: SignMode::Direct,
                                signature: vec![],
                            })),
                        },
                        Data::default(),
                    ],
                })),
            })
        );
        assert_eq!(descriptor.sequence, 0);
    }

    /// Wraps a single signature in `levels` multisig layers, built as raw
    /// bytes so nothing recurses while constructing the payload.
    fn nested_multisig(levels: usize) -> Vec<u8> {
        let mut data = single(0x01).encode_to_vec();
        for _ in 0..levels {
            let mut multi = Writer::new();
            multi.bytes(2, &data);
            let mut outer = Writer::new();
            outer.bytes(2, multi.as_slice());
            data = outer.finish().to_vec();
        }
        data
    }

    #[test]
    fn test_moderate_multisig_nesting_decodes() {
        let mut data = Data::decode(&nested_multisig(20)).unwrap();
        for _ in 0..20 {
            data = match data.sum {
                Some(Sum::Multi(mut multi)) => multi.signatures.remove(0),
                other => panic!("expected multi, got {:?}", other),
            };
        }
        assert_eq!(data, single(0x01));
    }

    #[test]
    fn test_runaway_multisig_nesting_is_framing_error() {
        let err = Data::decode(&nested_multisig(1_000)).unwrap_err();
        assert!(err.is_framing());
        assert!(err.to_string().contains("recursion limit"));
    }
}
