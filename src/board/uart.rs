//! Status line output over the buffered UARTE.

use embassy_nrf::buffered_uarte::BufferedUarteTx;
use embassy_nrf::uarte::{self, Baudrate};
use rectrigger::config::LINE_ENDING;
use rectrigger::Error;

/// Map a numeric baud rate onto the UARTE's fixed settings.
///
/// Unsupported rates fall back to 9600.
pub const fn baudrate(baud: u32) -> Baudrate {
    match baud {
        1200 => Baudrate::BAUD1200,
        2400 => Baudrate::BAUD2400,
        4800 => Baudrate::BAUD4800,
        19200 => Baudrate::BAUD19200,
        38400 => Baudrate::BAUD38400,
        57600 => Baudrate::BAUD57600,
        115200 => Baudrate::BAUD115200,
        _ => Baudrate::BAUD9600,
    }
}

/// Write `line` followed by the line terminator.
pub async fn write_line<U: uarte::Instance>(
    tx: &mut BufferedUarteTx<'_, U>,
    line: &str,
) -> Result<(), Error> {
    write_all(tx, line.as_bytes()).await?;
    write_all(tx, LINE_ENDING.as_bytes()).await?;
    tx.flush().await.map_err(|_| Error::Serial)
}

async fn write_all<U: uarte::Instance>(
    tx: &mut BufferedUarteTx<'_, U>,
    mut bytes: &[u8],
) -> Result<(), Error> {
    while !bytes.is_empty() {
        let n = tx.write(bytes).await.map_err(|_| Error::Serial)?;
        bytes = &bytes[n..];
    }
    Ok(())
}
