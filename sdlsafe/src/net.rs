// Owned handles for SDL_net sockets and socket sets.
//
// SDL_net reports errors through the same thread-local buffer as core SDL
// (`SDLNet_GetError` is an alias), so `sdl_call` and `take_last_error` work
// unchanged for these.

use sdlsafe_ffi::{UDPpacket, _SDLNet_SocketSet, _TCPsocket, _UDPsocket};

use crate::owned::owned_handle;

owned_handle!(
    /// A `TCPsocket`, closed with `SDLNet_TCP_Close`.
    TcpSocket, _TCPsocket, net, tcp_close
);

owned_handle!(
    /// A `UDPsocket`, closed with `SDLNet_UDP_Close`.
    UdpSocket, _UDPsocket, net, udp_close
);

owned_handle!(
    /// An `SDLNet_SocketSet`, freed with `SDLNet_FreeSocketSet`. Freeing the
    /// set does not close the sockets in it; they stay owned by their own
    /// wrappers.
    SocketSet, _SDLNet_SocketSet, net, free_socket_set
);

owned_handle!(
    /// A `UDPpacket` from `SDLNet_AllocPacket`, freed with `SDLNet_FreePacket`.
    UdpPacket, UDPpacket, net, free_packet
);
