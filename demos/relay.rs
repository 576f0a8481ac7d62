//! Relay - pack frames on one side, reassemble them on the other.
//!
//! This example demonstrates:
//! - Encoding a small record into a payload with `ByteCursor`
//! - Packing several frames back to back into one send buffer
//! - Feeding the bytes to a `FrameBuffer` in uneven chunks, as a socket would
//!
//! ```text
//! cargo run --example relay
//! ```

use framewire::{pack, ByteCursor, Frame, FrameBuffer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut send_buf = [0u8; 256];
    let mut writer = ByteCursor::writer(&mut send_buf);

    for (seq, text) in ["hello", "from", "the other side"].iter().enumerate() {
        // Payload: u32 sequence number + length-prefixed text
        let mut payload = [0u8; 64];
        let mut record = ByteCursor::writer(&mut payload);
        record.write_u32(seq as u32)?;
        record.write_string(text)?;
        let len = record.used();

        let mut frame = Frame::new(payload[..len].to_vec())?;
        frame.set_encrypted(seq % 2 == 0);
        pack(&frame, &mut writer)?;
    }

    let sent = writer.used();
    println!("packed {} bytes, {} left in send buffer", sent, writer.remaining());

    let mut buffer = FrameBuffer::new();
    for chunk in send_buf[..sent].chunks(7) {
        for frame in buffer.push(chunk)? {
            let mut reader = ByteCursor::reader(frame.payload());
            let seq = reader.read_u32()?;
            let text = reader.read_string()?;
            println!(
                "frame #{seq}: {:?} (length {}, encrypted {})",
                text,
                frame.length(),
                frame.is_encrypted()
            );
        }
    }

    Ok(())
}
