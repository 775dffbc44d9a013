//! Retained tuning state: a tiny postcard record with a CRC word, parked in
//! one dedicated flash sector.
//!
//! Anything wrong with the stored image — blank flash, torn write, stale
//! layout, out-of-range values — degrades to the defaults. Losing the last
//! selection is a nuisance; refusing to boot over it would not be.

pub mod types;

use crc::{Crc, CRC_32_ISO_HDLC};
use embedded_storage_async::nor_flash::NorFlash;

use crate::input::TuningState;
use crate::profile::DutyCycle;

pub use types::{StoreError, StoredTuning};

pub const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

// On-flash image: postcard payload zero-padded to a fixed length, CRC of the
// padded payload appended. 16 bytes total so any power-of-two write unit up
// to 16 divides it.
const RECORD_LEN: usize = 16;
const PAYLOAD_LEN: usize = RECORD_LEN - 4;

impl StoredTuning {
    /// Everything coming back from flash is bounds-checked: the table may
    /// have changed shape since the record was written.
    pub fn into_tuning(self) -> TuningState {
        TuningState::new(
            usize::from(self.index),
            DutyCycle::from_percent(self.duty_percent).unwrap_or(DutyCycle::DEFAULT),
        )
    }
}

pub struct TuningStore<F: NorFlash> {
    flash: F,
    base: u32,
}

impl<F: NorFlash> TuningStore<F> {
    /// `base` must be erase-aligned; the store owns the sector starting
    /// there.
    pub fn new(flash: F, base: u32) -> Self {
        Self { flash, base }
    }

    pub async fn load(&mut self) -> StoredTuning {
        let mut buf = [0u8; RECORD_LEN];
        if self.flash.read(self.base, &mut buf).await.is_err() {
            warn!("tuning record unreadable, using defaults");
            return StoredTuning::default();
        }
        let (payload, crc_bytes) = buf.split_at(PAYLOAD_LEN);
        let stored_crc =
            u32::from_le_bytes([crc_bytes[0], crc_bytes[1], crc_bytes[2], crc_bytes[3]]);
        if CRC32.checksum(payload) != stored_crc {
            info!("no valid tuning record, using defaults");
            return StoredTuning::default();
        }
        postcard::from_bytes(payload).unwrap_or_default()
    }

    pub async fn save(&mut self, tuning: &StoredTuning) -> Result<(), StoreError> {
        let mut buf = [0u8; RECORD_LEN];
        postcard::to_slice(tuning, &mut buf[..PAYLOAD_LEN]).map_err(|_| StoreError::Serialize)?;
        let crc = CRC32.checksum(&buf[..PAYLOAD_LEN]);
        buf[PAYLOAD_LEN..].copy_from_slice(&crc.to_le_bytes());

        self.flash
            .erase(self.base, self.base + F::ERASE_SIZE as u32)
            .await
            .map_err(|_| StoreError::Flash)?;
        self.flash
            .write(self.base, &buf)
            .await
            .map_err(|_| StoreError::Flash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embedded_storage_async::nor_flash::{
        ErrorType, NorFlashError, NorFlashErrorKind, ReadNorFlash,
    };

    const SECTOR: usize = 64;

    struct MockFlash {
        mem: [u8; 4 * SECTOR],
    }

    impl MockFlash {
        fn blank() -> Self {
            Self {
                mem: [0xFF; 4 * SECTOR],
            }
        }
    }

    #[derive(Debug)]
    struct MockFlashError;

    impl NorFlashError for MockFlashError {
        fn kind(&self) -> NorFlashErrorKind {
            NorFlashErrorKind::Other
        }
    }

    impl ErrorType for MockFlash {
        type Error = MockFlashError;
    }

    impl ReadNorFlash for MockFlash {
        const READ_SIZE: usize = 1;

        async fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
            let offset = offset as usize;
            bytes.copy_from_slice(&self.mem[offset..offset + bytes.len()]);
            Ok(())
        }

        fn capacity(&self) -> usize {
            self.mem.len()
        }
    }

    impl NorFlash for MockFlash {
        const WRITE_SIZE: usize = 4;
        const ERASE_SIZE: usize = SECTOR;

        async fn erase(&mut self, from: u32, to: u32) -> Result<(), Self::Error> {
            self.mem[from as usize..to as usize].fill(0xFF);
            Ok(())
        }

        async fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
            let offset = offset as usize;
            self.mem[offset..offset + bytes.len()].copy_from_slice(bytes);
            Ok(())
        }
    }

    #[test]
    fn roundtrips_both_values() {
        let mut store = TuningStore::new(MockFlash::blank(), SECTOR as u32);
        let stored = StoredTuning {
            index: 12,
            duty_percent: 70,
        };
        block_on(async {
            store.save(&stored).await.unwrap();
            assert_eq!(store.load().await, stored);
        });
    }

    #[test]
    fn blank_flash_yields_defaults() {
        let mut store = TuningStore::new(MockFlash::blank(), 0);
        let loaded = block_on(store.load());
        assert_eq!(loaded, StoredTuning::default());
        assert_eq!(loaded.into_tuning(), TuningState::default());
    }

    #[test]
    fn corrupted_record_yields_defaults() {
        let mut store = TuningStore::new(MockFlash::blank(), 0);
        block_on(async {
            store
                .save(&StoredTuning {
                    index: 3,
                    duty_percent: 30,
                })
                .await
                .unwrap();
            // Flip a payload bit behind the CRC's back.
            store.flash.mem[1] ^= 0x01;
            assert_eq!(store.load().await, StoredTuning::default());
        });
    }

    #[test]
    fn restore_clamps_hostile_values() {
        let hostile = StoredTuning {
            index: u16::MAX,
            duty_percent: 255,
        };
        let tuning = hostile.into_tuning();
        assert_eq!(tuning.index, crate::profile::PROFILE_TABLE.len() - 1);
        assert_eq!(tuning.duty, DutyCycle::DEFAULT);
    }
}
